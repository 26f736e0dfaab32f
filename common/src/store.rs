//! 仕入レコードの保管
//!
//! 並び順の位置がそのままレコードの識別子になる。
//! 変更操作のたびに全件をストレージへ書き込む。

use crate::error::{Error, Result};
use crate::storage::{StorageProvider, STORAGE_KEY};
use crate::transfer::{export_records_compact, import_records};
use crate::types::PurchaseRecord;
use tracing::{debug, warn};

/// 順序付きのレコード集合
#[derive(Debug)]
pub struct RecordStore<S: StorageProvider> {
    records: Vec<PurchaseRecord>,
    storage: S,
}

impl<S: StorageProvider> RecordStore<S> {
    /// ストレージから読み込む
    ///
    /// 保存データが無い・壊れている場合は空で開始する（エラーにしない）。
    pub fn open(storage: S) -> Self {
        let records = match storage.get(STORAGE_KEY) {
            Some(saved) => match import_records(&saved) {
                Ok(records) => {
                    debug!(count = records.len(), "loaded purchases from storage");
                    records
                }
                Err(e) => {
                    warn!("stored purchases unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self { records, storage }
    }

    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&PurchaseRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 末尾に追加
    pub fn append(&mut self, record: PurchaseRecord) -> Result<()> {
        self.records.push(record);
        self.persist()
    }

    /// 指定位置を置き換え
    pub fn replace_at(&mut self, index: usize, record: PurchaseRecord) -> Result<()> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *slot = record;
        self.persist()
    }

    /// 指定位置を削除（後続は1つ前に詰める）
    pub fn remove_at(&mut self, index: usize) -> Result<PurchaseRecord> {
        if index >= self.records.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        let removed = self.records.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// 全件を入れ替え
    pub fn replace_all(&mut self, records: Vec<PurchaseRecord>) -> Result<()> {
        self.records = records;
        self.persist()
    }

    /// 全件をストレージへ書き込む
    pub fn persist(&mut self) -> Result<()> {
        let document = export_records_compact(&self.records)?;
        self.storage.set(STORAGE_KEY, &document)?;
        debug!(count = self.records.len(), "persisted purchases");
        Ok(())
    }
}
