//! 一覧表示
//!
//! 番号は全件中の位置（1始まり）。絞り込み中でも edit/delete にそのまま使える。

use purchase_ledger_common::{format_amount, Field, LedgerView, PurchaseRecord};

const SEPARATOR: &str = " | ";

fn cell(record: &PurchaseRecord, field: Field) -> String {
    match field {
        Field::Quantity => format_amount(record.quantity),
        Field::Price => format_amount(record.price),
        _ => record.value_of(field),
    }
}

pub fn header_line() -> String {
    let labels: Vec<&str> = Field::ALL.iter().map(|f| f.label()).collect();
    format!("{:>4}{}{}", "No.", SEPARATOR, labels.join(SEPARATOR))
}

/// 合計行: 「2件 / 全3件  数量 7.00 / 金額 40.00 円」
pub fn footer_line(view: &LedgerView<'_>) -> String {
    format!(
        "{}件 / 全{}件  数量 {} / 金額 {} 円",
        view.totals.count,
        view.total_records,
        format_amount(view.totals.total_quantity),
        format_amount(view.totals.total_amount),
    )
}

/// 一覧全体の文字列
pub fn render_view(view: &LedgerView<'_>) -> String {
    let mut lines = vec![header_line()];
    for row in &view.rows {
        let cells: Vec<String> = Field::ALL.iter().map(|f| cell(row.record, *f)).collect();
        lines.push(format!("{:>4}{}{}", row.index + 1, SEPARATOR, cells.join(SEPARATOR)));
    }
    lines.push(footer_line(view));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use purchase_ledger_common::{FilterCriteria, Ledger, MemoryStorage};

    fn ledger() -> Ledger<MemoryStorage> {
        let mut ledger = Ledger::open(MemoryStorage::new());
        ledger
            .import_document(
                r#"[
                {"date":"2024-01-01","productCode":"P1","productName":"Bolt","quantity":2,"price":10,"supplier":"A"},
                {"date":"2024-01-02","productCode":"P2","productName":"Nut","quantity":3,"price":20,"supplier":"B"},
                {"date":"2024-01-03","productCode":"P3","productName":"Gear","quantity":5,"price":1234.5,"supplier":"A"}
            ]"#,
            )
            .expect("読み込み失敗");
        ledger
    }

    #[test]
    fn test_header_line() {
        let header = header_line();
        assert!(header.contains("No."));
        assert!(header.contains("日付 | 商品コード | 商品名"));
        assert!(header.ends_with("倉庫名"));
    }

    #[test]
    fn test_render_uses_store_numbers() {
        let mut ledger = ledger();
        ledger.set_criteria(FilterCriteria { supplier: "A".into(), ..Default::default() });

        let text = render_view(&ledger.view());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].trim_start().starts_with("1 |"));
        assert!(lines[2].trim_start().starts_with("3 |"));
        assert!(lines[2].contains("1,234.50"));
    }

    #[test]
    fn test_footer_line() {
        let mut ledger = ledger();
        ledger.set_criteria(FilterCriteria { supplier: "A".into(), ..Default::default() });

        let footer = footer_line(&ledger.view());
        assert_eq!(footer, "2件 / 全3件  数量 7.00 / 金額 6,192.50 円");
    }
}
