//! Purchase Ledger Common Library
//!
//! 仕入台帳のレコード管理・入力フォーム・絞り込み・集計・JSON入出力

pub mod types;
pub mod coerce;
pub mod error;
pub mod storage;
pub mod store;
pub mod draft;
pub mod filter;
pub mod aggregate;
pub mod transfer;
pub mod ledger;
pub mod export;

pub use types::{field_labels, Field, PurchaseRecord};
pub use error::{Error, Result};
pub use storage::{MemoryStorage, StorageProvider, STORAGE_KEY};
pub use store::RecordStore;
pub use draft::{CommitOutcome, DraftForm, EditTarget};
pub use filter::{filter, filter_indexed, matches, suggestions, FilterCriteria, ViewRow};
pub use aggregate::{format_amount, Totals};
pub use transfer::{export_records, import_records, EXPORT_FILE_NAME};
pub use ledger::{Ledger, LedgerView};
