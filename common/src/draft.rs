//! 入力フォーム
//!
//! 新規入力中、または既存レコードを編集中の1件分の下書き。
//! 値はすべて文字列で持ち、登録時に数量・単価だけ数値へ変換する。

use crate::coerce::coerce_number;
use crate::error::Result;
use crate::storage::StorageProvider;
use crate::store::RecordStore;
use crate::types::{Field, PurchaseRecord};

/// 編集対象
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditTarget {
    /// 新規入力
    #[default]
    None,
    /// 指定位置のレコードを編集中
    EditingAt(usize),
}

/// 登録の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Appended,
    Replaced(usize),
}

/// 入力フォーム
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftForm {
    values: [String; 9],
    target: EditTarget,
}

impl DraftForm {
    /// 空のフォーム
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存レコードを編集用に読み込む
    pub fn load(&mut self, record: &PurchaseRecord, index: usize) {
        for field in Field::ALL {
            self.values[field.index()] = record.value_of(field);
        }
        self.target = EditTarget::EditingAt(index);
    }

    /// 項目に値を設定（変換はしない）
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// (項目, 現在値) を表示順で返す
    pub fn values(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |f| (f, self.value(f)))
    }

    pub fn edit_target(&self) -> EditTarget {
        self.target
    }

    /// 編集中か（削除ボタンの表示判定）
    pub fn is_editing(&self) -> bool {
        matches!(self.target, EditTarget::EditingAt(_))
    }

    /// 未入力の必須項目
    pub fn missing_required(&self) -> Vec<Field> {
        Field::REQUIRED
            .iter()
            .copied()
            .filter(|f| self.value(*f).is_empty())
            .collect()
    }

    /// 必須項目がすべて入力済みか
    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// 登録されるレコードを組み立てる（フォームは変更しない）
    pub fn to_record(&self) -> PurchaseRecord {
        PurchaseRecord {
            date: self.value(Field::Date).to_string(),
            product_code: self.value(Field::ProductCode).to_string(),
            product_name: self.value(Field::ProductName).to_string(),
            spec: self.value(Field::Spec).to_string(),
            unit: self.value(Field::Unit).to_string(),
            quantity: coerce_number(self.value(Field::Quantity)),
            price: coerce_number(self.value(Field::Price)),
            supplier: self.value(Field::Supplier).to_string(),
            note: self.value(Field::Note).to_string(),
        }
    }

    /// 登録
    ///
    /// 編集中なら置き換え、そうでなければ末尾に追加する。
    /// 結果にかかわらずフォームは空に戻る。
    pub fn commit<S: StorageProvider>(&mut self, store: &mut RecordStore<S>) -> Result<CommitOutcome> {
        let record = self.to_record();
        let target = self.target;
        self.reset();

        match target {
            EditTarget::EditingAt(index) => {
                store.replace_at(index, record)?;
                Ok(CommitOutcome::Replaced(index))
            }
            EditTarget::None => {
                store.append(record)?;
                Ok(CommitOutcome::Appended)
            }
        }
    }

    /// 取消
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// 編集中のレコードを削除
    ///
    /// 新規入力中は何もしない。
    pub fn delete_target<S: StorageProvider>(
        &mut self,
        store: &mut RecordStore<S>,
    ) -> Result<Option<PurchaseRecord>> {
        let EditTarget::EditingAt(index) = self.target else {
            return Ok(None);
        };
        self.reset();
        store.remove_at(index).map(Some)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
