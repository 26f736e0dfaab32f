//! 数値変換
//!
//! 数量・単価は先頭の数値部分だけを読み取り、読めなければ 0 とする。
//! 非有限値と -0 も 0 に揃える。

use serde_json::Value;

/// 文字列を数値に変換（失敗時 0）
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim_start();
    let end = numeric_prefix_len(s);
    let value = s[..end].parse::<f64>().unwrap_or(0.0);
    finite_or_zero(value)
}

/// JSON値を数値に変換（数値・文字列以外は 0）
pub fn coerce_json_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => finite_or_zero(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => coerce_number(s),
        _ => 0.0,
    }
}

/// 数値を編集用の文字列にする（往復で同じ値に戻る最短表現）
pub fn number_to_string(value: f64) -> String {
    format!("{}", value)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

/// 先頭の `[+-]digits[.digits][e[+-]digits]` の長さ（バイト数）
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let frac = j - (i + 1);
        if digits + frac > 0 {
            digits += frac;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_plain_numbers() {
        assert_eq!(coerce_number("3"), 3.0);
        assert_eq!(coerce_number("2.5"), 2.5);
        assert_eq!(coerce_number("-4"), -4.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("3."), 3.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
    }

    #[test]
    fn test_coerce_leading_prefix() {
        assert_eq!(coerce_number("  12abc"), 12.0);
        assert_eq!(coerce_number("7.5kg"), 7.5);
        assert_eq!(coerce_number("2e"), 2.0);
        assert_eq!(coerce_number("1,000"), 1.0);
    }

    #[test]
    fn test_coerce_fallback_to_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("bad"), 0.0);
        assert_eq!(coerce_number("-"), 0.0);
        assert_eq!(coerce_number("."), 0.0);
        assert_eq!(coerce_number("Infinity"), 0.0);
        assert_eq!(coerce_number("1e999"), 0.0);
        assert!(coerce_number("-0").is_sign_positive());
    }

    #[test]
    fn test_coerce_json_number() {
        assert_eq!(coerce_json_number(&json!(3)), 3.0);
        assert_eq!(coerce_json_number(&json!(1.25)), 1.25);
        assert_eq!(coerce_json_number(&json!("3")), 3.0);
        assert_eq!(coerce_json_number(&json!("bad")), 0.0);
        assert_eq!(coerce_json_number(&json!(null)), 0.0);
        assert_eq!(coerce_json_number(&json!(true)), 0.0);
        assert_eq!(coerce_json_number(&json!([1])), 0.0);
    }

    #[test]
    fn test_number_to_string_roundtrip() {
        for value in [0.0, 3.0, 2.5, 0.1 + 0.2, 1234567.891, 1e-7] {
            let text = number_to_string(value);
            assert_eq!(coerce_number(&text), value, "{} -> {}", value, text);
        }
        assert_eq!(number_to_string(3.0), "3");
    }
}
