//! 集計
//!
//! 絞り込み後の件数・数量合計・金額合計。毎回全件から計算し直す。

use crate::types::PurchaseRecord;
use num_format::{Locale, ToFormattedString as _};

/// 集計結果
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub count: usize,
    pub total_quantity: f64,
    pub total_amount: f64,
}

impl Totals {
    /// 絞り込み結果を集計（丸めなし）
    pub fn compute<'a>(records: impl IntoIterator<Item = &'a PurchaseRecord>) -> Self {
        records.into_iter().fold(Self::default(), |acc, r| Self {
            count: acc.count + 1,
            total_quantity: acc.total_quantity + r.quantity,
            total_amount: acc.total_amount + r.quantity * r.price,
        })
    }
}

/// 表示用: 小数2桁・3桁区切り
///
/// 先に小数2桁へ丸めてから整数部を区切る（999.999 → 1,000.00）。
/// 丸めて 0 になる負数には符号を付けない。
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let grouped = int_part
        .parse::<u128>()
        .map(|n| n.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| int_part.to_string());

    let sign = if value < 0.0 && rounded.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter, FilterCriteria};

    fn record(quantity: f64, price: f64, supplier: &str) -> PurchaseRecord {
        PurchaseRecord {
            quantity,
            price,
            supplier: supplier.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_totals_empty() {
        let records: Vec<PurchaseRecord> = Vec::new();
        let totals = Totals::compute(&records);
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_totals_supplier_scenario() {
        let records = vec![record(2.0, 10.0, "A"), record(3.0, 20.0, "B"), record(5.0, 4.0, "A")];
        let criteria = FilterCriteria { supplier: "A".into(), ..Default::default() };

        let view = filter(&records, &criteria);
        let totals = Totals::compute(view.iter().copied());

        assert_eq!(totals.count, 2);
        assert_eq!(totals.total_quantity, 7.0);
        assert_eq!(totals.total_amount, 40.0);
    }

    #[test]
    fn test_totals_unrounded() {
        let records = vec![record(0.1, 1.0, ""), record(0.2, 1.0, "")];
        let totals = Totals::compute(&records);
        assert_eq!(totals.total_quantity, 0.1 + 0.2);
        assert_eq!(totals.total_amount, 0.1 + 0.2);
    }

    #[test]
    fn test_totals_match_view_sum() {
        let records = vec![
            record(1.5, 3.0, "North"),
            record(2.0, 7.25, "South"),
            record(4.0, 0.5, "North"),
        ];
        for supplier in ["", "north", "south", "none"] {
            let criteria = FilterCriteria { supplier: supplier.into(), ..Default::default() };
            let view = filter(&records, &criteria);
            let expected: f64 = view.iter().map(|r| r.quantity * r.price).sum();
            assert_eq!(Totals::compute(view.iter().copied()).total_amount, expected);
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(40.0), "40.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(-2500.0), "-2,500.00");
        assert_eq!(format_amount(-0.001), "0.00");
        assert_eq!(format_amount(-0.0), "0.00");
    }

    #[test]
    fn test_format_amount_large_values() {
        assert_eq!(format_amount(1e15), "1,000,000,000,000,000.00");
        assert_eq!(format_amount(-1234567.25), "-1,234,567.25");
        assert_eq!(format_amount(0.1 + 0.2), "0.30");
    }
}
