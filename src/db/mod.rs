//! In-memory rune database
//!
//! Caches every entity the API has served, one table per kind. Reads
//! never block: a miss schedules a fetch and answers `None` until the
//! envelope arrives. Entities are fetched at most once per run.

pub mod store;
pub mod table;

// Re-export main types
pub use store::{ChangeListener, DbStats, FetchRequest, RuneDb, SyncReport, TableStats};
pub use table::{Record, Slot, Table};
