use crate::error::{LedgerError, Result};
use purchase_ledger_common::EXPORT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 仕入データの保存先（未設定なら既定のデータディレクトリ）
    pub data_dir: Option<PathBuf>,
    pub export_file_name: String,
    pub pretty_export: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            export_file_name: EXPORT_FILE_NAME.into(),
            pretty_export: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LedgerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("purchase-ledger").join("config.json"))
    }

    /// 実際に使うデータディレクトリ
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| LedgerError::Config("データディレクトリが見つかりません".into()))?;
        Ok(base.join("purchase-ledger"))
    }

    pub fn set_data_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.data_dir = Some(dir);
        self.save()
    }
}
