//! 対話入力
//!
//! 未入力の必須項目を1つずつ尋ねる。既存の値を候補として表示する。

use crate::error::{LedgerError, Result};
use dialoguer::{Confirm, Input};
use purchase_ledger_common::{Field, Ledger, PurchaseRecord, StorageProvider};

/// 候補表示の上限
const MAX_CANDIDATES: usize = 10;

/// 今日の日付 (YYYY-MM-DD)
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// 候補の表示文字列（上限を超えた分は件数のみ）
pub fn candidate_line(candidates: &[String]) -> Option<String> {
    if candidates.is_empty() {
        return None;
    }
    let shown: Vec<&str> = candidates.iter().take(MAX_CANDIDATES).map(String::as_str).collect();
    let rest = candidates.len().saturating_sub(MAX_CANDIDATES);
    if rest > 0 {
        Some(format!("{} …他{}件", shown.join(", "), rest))
    } else {
        Some(shown.join(", "))
    }
}

/// 未入力の必須項目を対話入力でフォームに埋める
pub fn fill_missing_required<S: StorageProvider>(ledger: &mut Ledger<S>) -> Result<()> {
    for field in ledger.draft().missing_required() {
        let candidates = ledger.suggestions(field);
        let value = prompt_field(field, &candidates)?;
        ledger.set_field(field, value);
    }
    Ok(())
}

/// 1項目の入力プロンプト
fn prompt_field(field: Field, candidates: &[String]) -> Result<String> {
    if let Some(line) = candidate_line(candidates) {
        println!("  候補: {}", line);
    }

    let mut input = Input::<String>::new()
        .with_prompt(field.label())
        .allow_empty(!field.is_required());
    if field == Field::Date {
        input = input.default(today());
    }

    let value = input
        .interact_text()
        .map_err(|e| LedgerError::Prompt(e.to_string()))?;
    Ok(value.trim().to_string())
}

/// 削除確認
pub fn confirm_delete(record: &PurchaseRecord) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!(
            "{} {} {} を削除しますか?",
            record.date, record.product_code, record.product_name
        ))
        .default(false)
        .interact()
        .map_err(|e| LedgerError::Prompt(e.to_string()))
}
