//! Cashback record model for persistence.
//!
//! Maps to the `cashbacks` table; returned by CashbackRepository::get.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of a stored record. Assigned by the store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A full row of the `cashbacks` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CashbackRecord {
    pub id: i64,
    pub user_id: i64,
    pub bank: String,
    pub category: String,
    pub percent: f64,
    pub created_at: DateTime<Utc>,
}

impl CashbackRecord {
    pub fn record_id(&self) -> RecordId {
        RecordId(self.id)
    }
}
