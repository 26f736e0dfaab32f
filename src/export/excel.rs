//! Excel生成（CLI版）
//!
//! 共通ライブラリの excel_core でバッファを作り、ファイルに保存する。

use crate::error::{LedgerError, Result};
use purchase_ledger_common::export::excel_core::generate_report_buffer;
use purchase_ledger_common::LedgerView;
use std::path::Path;

pub fn generate_report(view: &LedgerView<'_>, output_path: &Path, title: &str) -> Result<()> {
    let buffer = generate_report_buffer(&view.rows, &view.totals, title).map_err(LedgerError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
