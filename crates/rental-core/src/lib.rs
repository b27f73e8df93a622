//! Rental Core - Property records, local storage, and statistics
//!
//! This crate provides the record model for rental properties, appliances,
//! vendors and maintenance tasks, and a store that keeps each kind as one
//! collection under its own key in a local key-value substrate.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod model;
pub mod stats;
pub mod storage;

pub use model::{Appliance, MaintenanceTask, Property, Record, RecordId, Vendor};
pub use stats::Statistics;
pub use storage::{Database, KeyValueStore, MemoryStore, RecordStore, SqliteStore};
