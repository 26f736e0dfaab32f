//! JSON入出力
//!
//! 全件をJSON配列として書き出し・読み込みする。
//! 読み込み時は項目ごとに正規化し、未知の項目は捨てる。

use crate::coerce::coerce_json_number;
use crate::error::{Error, Result};
use crate::types::{Field, PurchaseRecord};
use serde_json::{Map, Value};

/// 書き出しファイル名の既定値
pub const EXPORT_FILE_NAME: &str = "purchases.json";

/// 全件をJSON文字列にする（整形あり）
pub fn export_records(records: &[PurchaseRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// 全件をJSON文字列にする（整形なし）
pub fn export_records_compact(records: &[PurchaseRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// JSON文書を読み込んでレコード列にする
///
/// 配列以外、または要素がオブジェクトでない場合は `MalformedDocument`。
/// 途中で失敗した場合は何も返さない（部分的な結果は作らない）。
pub fn import_records(document: &str) -> Result<Vec<PurchaseRecord>> {
    let value: Value = serde_json::from_str(document)
        .map_err(|e| Error::MalformedDocument(format!("invalid JSON: {}", e)))?;

    let Value::Array(items) = value else {
        return Err(Error::MalformedDocument("expected a JSON array".to_string()));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| normalize_record(index, item))
        .collect()
}

fn normalize_record(index: usize, item: &Value) -> Result<PurchaseRecord> {
    let Value::Object(map) = item else {
        return Err(Error::MalformedDocument(format!(
            "element {} is not an object",
            index
        )));
    };

    Ok(PurchaseRecord {
        date: text_field(index, map, Field::Date)?,
        product_code: text_field(index, map, Field::ProductCode)?,
        product_name: text_field(index, map, Field::ProductName)?,
        spec: text_field(index, map, Field::Spec)?,
        unit: text_field(index, map, Field::Unit)?,
        quantity: number_field(map, Field::Quantity),
        price: number_field(map, Field::Price),
        supplier: text_field(index, map, Field::Supplier)?,
        note: text_field(index, map, Field::Note)?,
    })
}

fn text_field(index: usize, map: &Map<String, Value>, field: Field) -> Result<String> {
    match map.get(field.key()) {
        // 0 と false は未入力扱い
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(String::new()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(true)) => Ok("true".to_string()),
        Some(_) => Err(Error::MalformedDocument(format!(
            "element {}: field `{}` must be a string",
            index,
            field.key()
        ))),
    }
}

fn number_field(map: &Map<String, Value>, field: Field) -> f64 {
    map.get(field.key()).map(coerce_json_number).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, quantity: f64, price: f64) -> PurchaseRecord {
        PurchaseRecord {
            date: "2024-03-01".to_string(),
            product_code: code.to_string(),
            product_name: format!("{}品", code),
            spec: "10kg".to_string(),
            unit: "袋".to_string(),
            quantity,
            price,
            supplier: "山田商店".to_string(),
            note: "第1倉庫".to_string(),
        }
    }

    #[test]
    fn test_import_coerces_fields() {
        let doc = r#"[{"date":"2024-01-01","productCode":"P1","productName":"Widget","quantity":"3","price":"bad"}]"#;
        let records = import_records(doc).expect("読み込み失敗");

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.date, "2024-01-01");
        assert_eq!(r.product_code, "P1");
        assert_eq!(r.product_name, "Widget");
        assert_eq!(r.quantity, 3.0);
        assert_eq!(r.price, 0.0);
        assert_eq!(r.spec, "");
        assert_eq!(r.unit, "");
        assert_eq!(r.supplier, "");
        assert_eq!(r.note, "");
    }

    #[test]
    fn test_import_null_and_unknown_fields() {
        let doc = r#"[{"date":null,"productCode":"P2","quantity":null,"price":12.5,"extra":"drop me"}]"#;
        let records = import_records(doc).expect("読み込み失敗");

        assert_eq!(records[0].date, "");
        assert_eq!(records[0].quantity, 0.0);
        assert_eq!(records[0].price, 12.5);
    }

    #[test]
    fn test_import_scalar_text_fields() {
        let doc = r#"[{"productCode":1001,"spec":true}]"#;
        let records = import_records(doc).expect("読み込み失敗");

        assert_eq!(records[0].product_code, "1001");
        assert_eq!(records[0].spec, "true");
    }

    #[test]
    fn test_import_falsy_text_fields_become_empty() {
        let doc = r#"[{"productCode":0,"spec":false,"unit":"","supplier":0.0,"note":"0"}]"#;
        let records = import_records(doc).expect("読み込み失敗");

        assert_eq!(records[0].product_code, "");
        assert_eq!(records[0].spec, "");
        assert_eq!(records[0].unit, "");
        assert_eq!(records[0].supplier, "");
        // 文字列の "0" はそのまま
        assert_eq!(records[0].note, "0");
    }

    #[test]
    fn test_import_empty_array() {
        let records = import_records("[]").expect("読み込み失敗");
        assert!(records.is_empty());
    }

    #[test]
    fn test_import_rejects_non_array() {
        let err = import_records(r#"{"date":"2024-01-01"}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        let err = import_records("{ invalid json }").unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn test_import_rejects_non_object_element() {
        let doc = r#"[{"productCode":"P1"}, 42]"#;
        let err = import_records(doc).unwrap_err();
        match err {
            Error::MalformedDocument(msg) => assert!(msg.contains("element 1")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_import_rejects_nested_text_field() {
        let doc = r#"[{"supplier":{"name":"A"}}]"#;
        let err = import_records(doc).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn test_export_import_roundtrip() {
        let original = vec![record("A1", 2.0, 10.0), record("B2", 0.5, 1234.75), record("C3", 0.0, 0.0)];

        let doc = export_records(&original).expect("書き出し失敗");
        let restored = import_records(&doc).expect("読み込み失敗");
        assert_eq!(restored, original);

        let compact = export_records_compact(&original).expect("書き出し失敗");
        assert_eq!(import_records(&compact).expect("読み込み失敗"), original);
    }

    #[test]
    fn test_export_import_roundtrip_full_precision() {
        let values = [
            0.1 + 0.2,
            11290.774160688077,
            99414.14234139935,
            1.0 / 3.0,
            123456789.01234567,
            5e-324,
            f64::MAX,
        ];
        let original: Vec<PurchaseRecord> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| record(&format!("F{}", i), v, v / 7.0))
            .collect();

        let restored = import_records(&export_records(&original).expect("書き出し失敗")).expect("読み込み失敗");
        for (before, after) in original.iter().zip(&restored) {
            assert_eq!(after.quantity.to_bits(), before.quantity.to_bits(), "{}", before.quantity);
            assert_eq!(after.price.to_bits(), before.price.to_bits(), "{}", before.price);
        }
        assert_eq!(restored, original);
    }

    #[test]
    fn test_export_keeps_typed_numbers() {
        let doc = export_records(&[record("A1", 2.0, 10.5)]).expect("書き出し失敗");
        let value: Value = serde_json::from_str(&doc).expect("JSON解析失敗");

        assert!(value[0]["quantity"].is_number());
        assert!(value[0]["price"].is_number());
        assert_eq!(value[0]["productCode"], "A1");
    }
}
