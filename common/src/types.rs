//! 仕入レコードの型定義
//!
//! - PurchaseRecord: 仕入明細1行
//! - Field: 入力フォーム・一覧表の9項目（表示順固定）

use crate::coerce::number_to_string;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 仕入明細
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseRecord {
    /// 日付 (YYYY-MM-DD)
    pub date: String,
    pub product_code: String,
    pub product_name: String,
    /// 規格
    pub spec: String,
    /// 単位
    pub unit: String,
    pub quantity: f64,
    /// 単価
    pub price: f64,
    /// 仕入先
    pub supplier: String,
    /// 倉庫名として使用
    pub note: String,
}

impl PurchaseRecord {
    /// 金額（数量 × 単価）
    pub fn amount(&self) -> f64 {
        self.quantity * self.price
    }

    /// 項目値を文字列で取得（数値は文字列表現）
    pub fn value_of(&self, field: Field) -> String {
        match field {
            Field::Date => self.date.clone(),
            Field::ProductCode => self.product_code.clone(),
            Field::ProductName => self.product_name.clone(),
            Field::Spec => self.spec.clone(),
            Field::Unit => self.unit.clone(),
            Field::Quantity => number_to_string(self.quantity),
            Field::Price => number_to_string(self.price),
            Field::Supplier => self.supplier.clone(),
            Field::Note => self.note.clone(),
        }
    }
}

/// レコード項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Date,
    ProductCode,
    ProductName,
    Spec,
    Unit,
    Quantity,
    Price,
    Supplier,
    Note,
}

impl Field {
    /// 表示順
    pub const ALL: [Field; 9] = [
        Field::Date,
        Field::ProductCode,
        Field::ProductName,
        Field::Spec,
        Field::Unit,
        Field::Quantity,
        Field::Price,
        Field::Supplier,
        Field::Note,
    ];

    /// 登録時に必須の項目
    pub const REQUIRED: [Field; 5] = [
        Field::Date,
        Field::ProductCode,
        Field::ProductName,
        Field::Quantity,
        Field::Price,
    ];

    /// JSONキー
    pub fn key(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::ProductCode => "productCode",
            Field::ProductName => "productName",
            Field::Spec => "spec",
            Field::Unit => "unit",
            Field::Quantity => "quantity",
            Field::Price => "price",
            Field::Supplier => "supplier",
            Field::Note => "note",
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Field::Date => "日付",
            Field::ProductCode => "商品コード",
            Field::ProductName => "商品名",
            Field::Spec => "規格",
            Field::Unit => "単位",
            Field::Quantity => "数量",
            Field::Price => "単価",
            Field::Supplier => "仕入先",
            Field::Note => "倉庫名",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Quantity | Field::Price)
    }

    /// ALL 内の位置
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// (キー, ラベル) の一覧を表示順で返す
pub fn field_labels() -> Vec<(&'static str, &'static str)> {
    Field::ALL.iter().map(|f| (f.key(), f.label())).collect()
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(s) || f.label() == s)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}
