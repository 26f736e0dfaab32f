//! 永続化プロバイダ
//!
//! キー → 文字列の単純なストレージ。JSONの直列化は RecordStore 側で行う。

use crate::error::Result;
use std::collections::HashMap;

/// 仕入データを保存するキー
pub const STORAGE_KEY: &str = "purchases";

/// キー・バリュー型ストレージ
pub trait StorageProvider {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストレージ（テスト・組み込み用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期値入りで作成
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl StorageProvider for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
