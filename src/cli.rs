use crate::error::{LedgerError, Result};
use clap::{Args, Parser, Subcommand};
use purchase_ledger_common::{Field, FilterCriteria, Ledger, StorageProvider};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "purchase")]
#[command(about = "仕入データ管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// データディレクトリ（設定より優先）
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 仕入データを登録
    Add {
        #[command(flatten)]
        fields: RecordArgs,

        /// 未入力の必須項目を対話入力しない
        #[arg(long)]
        no_prompt: bool,
    },

    /// 仕入データを修正
    Edit {
        /// 一覧の番号
        #[arg(required = true)]
        number: usize,

        #[command(flatten)]
        fields: RecordArgs,
    },

    /// 仕入データを削除
    Delete {
        /// 一覧の番号
        #[arg(required = true)]
        number: usize,

        /// 確認なしで削除
        #[arg(short, long)]
        yes: bool,
    },

    /// 一覧と合計を表示
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// JSONファイルから全件を読み込み（既存データは置き換え）
    Import {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 全件をJSONファイルに保存
    Export {
        /// 出力ファイル/ディレクトリ（デフォルト: purchases.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 整形せずに出力
        #[arg(long)]
        compact: bool,
    },

    /// 絞り込み結果をExcelに出力
    Report {
        /// 出力xlsxファイル
        #[arg(required = true)]
        output: PathBuf,

        /// シート見出し
        #[arg(short, long, default_value = "仕入一覧")]
        title: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// 設定を表示/編集
    Config {
        /// データディレクトリを設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// レコード項目の指定
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// 日付 (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// 商品コード
    #[arg(long)]
    pub code: Option<String>,

    /// 商品名
    #[arg(long)]
    pub name: Option<String>,

    /// 規格
    #[arg(long)]
    pub spec: Option<String>,

    /// 単位
    #[arg(long)]
    pub unit: Option<String>,

    /// 数量
    #[arg(long)]
    pub quantity: Option<String>,

    /// 単価
    #[arg(long)]
    pub price: Option<String>,

    /// 仕入先
    #[arg(long)]
    pub supplier: Option<String>,

    /// 倉庫名
    #[arg(long, visible_alias = "warehouse")]
    pub note: Option<String>,
}

impl RecordArgs {
    /// 指定された項目のみ (項目, 値) で返す
    pub fn values(&self) -> Vec<(Field, &str)> {
        [
            (Field::Date, &self.date),
            (Field::ProductCode, &self.code),
            (Field::ProductName, &self.name),
            (Field::Spec, &self.spec),
            (Field::Unit, &self.unit),
            (Field::Quantity, &self.quantity),
            (Field::Price, &self.price),
            (Field::Supplier, &self.supplier),
            (Field::Note, &self.note),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }

    /// フォームに反映
    pub fn apply<S: StorageProvider>(&self, ledger: &mut Ledger<S>) {
        for (field, value) in self.values() {
            ledger.set_field(field, value);
        }
    }
}

/// 検索条件の指定
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// 商品コード または 商品名
    #[arg(short, long, default_value = "")]
    pub keyword: String,

    /// 日付（完全一致）
    #[arg(long = "on", default_value = "")]
    pub date: String,

    /// 仕入先
    #[arg(long = "by-supplier", default_value = "")]
    pub supplier: String,

    /// 倉庫名
    #[arg(long = "in-warehouse", default_value = "")]
    pub note: String,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            keyword: self.keyword.clone(),
            date: self.date.clone(),
            supplier: self.supplier.clone(),
            note: self.note.clone(),
        }
    }
}

/// 一覧の番号（1始まり）を位置に変換
pub fn record_index(number: usize, len: usize) -> Result<usize> {
    match number.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => Err(LedgerError::RecordNotFound(number)),
    }
}

/// 未入力の必須項目をラベルで列挙
pub fn describe_missing(fields: &[Field]) -> String {
    fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")
}
