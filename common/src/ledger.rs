//! 仕入台帳
//!
//! RecordStore・DraftForm・FilterCriteria を1つずつ持ち、画面操作の単位で
//! 処理をまとめる。各操作は最後まで実行してから戻る。

use crate::aggregate::Totals;
use crate::draft::{CommitOutcome, DraftForm, EditTarget};
use crate::error::{Error, Result};
use crate::filter::{filter_indexed, suggestions, FilterCriteria, ViewRow};
use crate::storage::StorageProvider;
use crate::store::RecordStore;
use crate::transfer::{export_records, export_records_compact, import_records};
use crate::types::{Field, PurchaseRecord};
use tracing::info;

/// 一覧表示用のデータ
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerView<'a> {
    pub rows: Vec<ViewRow<'a>>,
    pub totals: Totals,
    /// 絞り込み前の件数
    pub total_records: usize,
}

/// 仕入台帳
#[derive(Debug)]
pub struct Ledger<S: StorageProvider> {
    store: RecordStore<S>,
    draft: DraftForm,
    criteria: FilterCriteria,
}

impl<S: StorageProvider> Ledger<S> {
    /// ストレージから開く（読めなければ空）
    pub fn open(storage: S) -> Self {
        Self {
            store: RecordStore::open(storage),
            draft: DraftForm::new(),
            criteria: FilterCriteria::default(),
        }
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn records(&self) -> &[PurchaseRecord] {
        self.store.records()
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_editing()
    }

    pub fn edit_target(&self) -> EditTarget {
        self.draft.edit_target()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// 指定位置のレコードをフォームに読み込む
    pub fn begin_edit(&mut self, index: usize) -> Result<()> {
        let record = self.store.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.store.len(),
        })?;
        self.draft.load(record, index);
        Ok(())
    }

    pub fn commit(&mut self) -> Result<CommitOutcome> {
        self.draft.commit(&mut self.store)
    }

    pub fn cancel(&mut self) {
        self.draft.cancel();
    }

    /// 編集中のレコードを削除（新規入力中は何もしない）
    pub fn delete(&mut self) -> Result<Option<PurchaseRecord>> {
        self.draft.delete_target(&mut self.store)
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn clear_criteria(&mut self) {
        self.criteria.clear();
    }

    /// 現在の条件で絞り込んだ一覧と集計
    pub fn view(&self) -> LedgerView<'_> {
        let rows = filter_indexed(self.store.records(), &self.criteria);
        let totals = Totals::compute(rows.iter().map(|row| row.record));
        LedgerView {
            rows,
            totals,
            total_records: self.store.len(),
        }
    }

    /// 項目の入力候補
    pub fn suggestions(&self, field: Field) -> Vec<String> {
        suggestions(self.store.records(), field)
    }

    /// 全件をJSON文書にする
    pub fn export_document(&self, pretty: bool) -> Result<String> {
        let document = if pretty {
            export_records(self.store.records())?
        } else {
            export_records_compact(self.store.records())?
        };
        info!(count = self.store.len(), "exported purchases");
        Ok(document)
    }

    /// JSON文書で全件を置き換える
    ///
    /// 読み込みに失敗した場合、レコードも検索条件も変更しない。
    /// 成功時は検索条件を空に戻す。
    pub fn import_document(&mut self, document: &str) -> Result<usize> {
        let records = import_records(document)?;
        let count = records.len();
        self.clear_criteria();
        self.store.replace_all(records)?;
        info!(count, "imported purchases");
        Ok(count)
    }
}
