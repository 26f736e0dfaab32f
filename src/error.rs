use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("必須項目が未入力です: {0}")]
    MissingRequired(String),

    #[error("番号 {0} の仕入データはありません")]
    RecordNotFound(usize),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] purchase_ledger_common::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
