//! Store abstraction used by the chat handlers.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{CashbackRow, NewCashback, RecordId};

/// Per-user cashback storage. Every method is scoped to one `user_id`.
#[async_trait]
pub trait CashbackStore: Send + Sync {
    /// Appends one record and returns its id once committed.
    async fn add(&self, cashback: &NewCashback) -> Result<RecordId, StorageError>;
    /// All of the user's rows, bank ascending then percent descending.
    async fn list_all(&self, user_id: i64) -> Result<Vec<CashbackRow>, StorageError>;
    /// Rows whose category contains `query`, percent descending.
    async fn find_best(&self, user_id: i64, query: &str)
        -> Result<Vec<CashbackRow>, StorageError>;
    /// Number of records the user owns.
    async fn count(&self, user_id: i64) -> Result<i64, StorageError>;
    /// Deletes every record of the user; returns how many were removed.
    async fn clear(&self, user_id: i64) -> Result<u64, StorageError>;
}
