//! The (bank, category, percent) view returned by listing and search.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CashbackRow {
    pub bank: String,
    pub category: String,
    pub percent: f64,
}

impl CashbackRow {
    pub fn new(bank: impl Into<String>, category: impl Into<String>, percent: f64) -> Self {
        Self {
            bank: bank.into(),
            category: category.into(),
            percent,
        }
    }
}
