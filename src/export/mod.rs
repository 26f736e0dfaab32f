pub mod excel;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// 出力先の決定
///
/// 未指定ならカレントの `file_name`、ディレクトリ（または拡張子なし）なら
/// その中の `file_name`、それ以外は指定パスそのもの。
pub fn output_path(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        None => PathBuf::from(file_name),
        Some(path) if path.is_dir() || path.extension().is_none() => path.join(file_name),
        Some(path) => path.to_path_buf(),
    }
}

/// JSON文書を書き出す
pub async fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, document).await?;
    Ok(())
}

/// 取込ファイルを読む
pub async fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(crate::error::LedgerError::FileNotFound(path.display().to_string()));
    }
    Ok(tokio::fs::read_to_string(path).await?)
}
