//! 検索条件による絞り込み
//!
//! 4つの条件のAND。大文字小文字は区別しない（日付のみ完全一致）。

use crate::types::{Field, PurchaseRecord};
use std::collections::HashSet;

/// 検索条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// 商品コード または 商品名
    pub keyword: String,
    /// 日付（空なら全件）
    pub date: String,
    pub supplier: String,
    /// 倉庫名
    pub note: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty() && self.date.is_empty() && self.supplier.is_empty() && self.note.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// 絞り込み結果の1行（元の位置つき）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRow<'a> {
    /// 全件中の位置
    pub index: usize,
    pub record: &'a PurchaseRecord,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// 条件に一致するか
pub fn matches(record: &PurchaseRecord, criteria: &FilterCriteria) -> bool {
    let keyword_match = criteria.keyword.is_empty()
        || contains_ci(&record.product_code, &criteria.keyword)
        || contains_ci(&record.product_name, &criteria.keyword);
    let date_match = criteria.date.is_empty() || record.date == criteria.date;
    let supplier_match = contains_ci(&record.supplier, &criteria.supplier);
    let note_match = contains_ci(&record.note, &criteria.note);

    keyword_match && date_match && supplier_match && note_match
}

/// 一致するレコードを元の順序で返す
pub fn filter<'a>(records: &'a [PurchaseRecord], criteria: &FilterCriteria) -> Vec<&'a PurchaseRecord> {
    records.iter().filter(|r| matches(r, criteria)).collect()
}

/// 一致するレコードを元の位置つきで返す
pub fn filter_indexed<'a>(records: &'a [PurchaseRecord], criteria: &FilterCriteria) -> Vec<ViewRow<'a>> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, criteria))
        .map(|(index, record)| ViewRow { index, record })
        .collect()
}

/// 入力候補: 項目の既存値（重複・空を除く、出現順）
pub fn suggestions(records: &[PurchaseRecord], field: Field) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| match field {
            Field::Quantity => r.quantity != 0.0,
            Field::Price => r.price != 0.0,
            _ => true,
        })
        .map(|r| r.value_of(field))
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(v.clone()))
        .collect()
}
