//! Insert payload for a cashback record.
//!
//! Used by CashbackStore::add. `id` and `created_at` are assigned by the store.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCashback {
    pub user_id: i64,
    pub bank: String,
    pub category: String,
    pub percent: f64,
}

impl NewCashback {
    pub fn new(
        user_id: i64,
        bank: impl Into<String>,
        category: impl Into<String>,
        percent: f64,
    ) -> Self {
        Self {
            user_id,
            bank: bank.into(),
            category: category.into(),
            percent,
        }
    }

    /// Checks the columns the table cannot hold: empty labels and NaN/infinite percents.
    /// Labels are otherwise stored exactly as given.
    pub fn validate(&self) -> Result<(), StorageError> {
        if self.bank.is_empty() {
            return Err(StorageError::InvalidRecord("bank is empty".to_string()));
        }
        if self.category.is_empty() {
            return Err(StorageError::InvalidRecord("category is empty".to_string()));
        }
        if !self.percent.is_finite() {
            return Err(StorageError::InvalidRecord(format!(
                "percent is not a finite number: {}",
                self.percent
            )));
        }
        Ok(())
    }
}
