pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod file_storage;
pub mod prompt;
pub mod table;
