//! Storage crate: cashback persistence and best-match lookup.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – CashbackRecord, CashbackRow, NewCashback, RecordId
//! - [`query`] – Best-match ranking over a user's rows
//! - [`repository`] – CashbackStore trait
//! - [`cashback_repo`] – CashbackRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod cashback_repo;
mod error;
mod models;
pub mod query;
mod repository;
mod sqlite_pool;


pub use cashback_repo::CashbackRepository;
pub use error::StorageError;
pub use models::{CashbackRecord, CashbackRow, NewCashback, RecordId};
pub use repository::CashbackStore;
pub use sqlite_pool::SqlitePoolManager;
