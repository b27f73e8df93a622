//! Storage layer (key-value substrate + typed collections)

pub mod codec;
pub mod db;
pub mod issues;
pub mod memory;
pub mod migrations;
pub mod sqlite;
pub mod store;
pub mod substrate;

pub use db::Database;
pub use issues::{IssueKind, StoreIssue};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::{CascadeReport, RecordStore};
pub use substrate::{KeyValueStore, SubstrateError};
