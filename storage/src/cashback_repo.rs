//! Cashback repository: persistence and queries for cashback records.
//!
//! Uses SqlitePoolManager and the models (CashbackRecord, CashbackRow, NewCashback).
//! Search ranking is delegated to [`crate::query::best_matches`].

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::error::StorageError;
use crate::models::{CashbackRecord, CashbackRow, NewCashback, RecordId};
use crate::query;
use crate::repository::CashbackStore;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct CashbackRepository {
    pool_manager: SqlitePoolManager,
}

impl CashbackRepository {
    /// Opens the database and ensures the schema exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        Self::with_pool_manager(pool_manager).await
    }

    /// Wraps an existing pool and ensures the schema exists.
    pub async fn with_pool_manager(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Creates the `cashbacks` table and its index if they do not exist. Safe to call repeatedly.
    pub async fn initialize(&self) -> Result<(), StorageError> {
        info!("Creating database tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS cashbacks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                bank TEXT NOT NULL,
                category TEXT NOT NULL,
                percent REAL NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_cashbacks_user_id ON cashbacks(user_id)")
            .execute(pool)
            .await?;

        info!("Database tables created successfully");
        Ok(())
    }

    /// Fetches one record owned by `user_id`. Records of other users are never returned.
    pub async fn get(
        &self,
        user_id: i64,
        id: RecordId,
    ) -> Result<Option<CashbackRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let record = sqlx::query_as::<_, CashbackRecord>(
            "SELECT id, user_id, bank, category, percent, created_at FROM cashbacks WHERE id = ? AND user_id = ?",
        )
        .bind(id.0)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Closes the pool. Used on shutdown and by tests that reopen the same file.
    pub async fn close(&self) {
        self.pool_manager.close().await;
    }
}

#[async_trait]
impl CashbackStore for CashbackRepository {
    #[instrument(skip(self, cashback), fields(user_id = cashback.user_id))]
    async fn add(&self, cashback: &NewCashback) -> Result<RecordId, StorageError> {
        cashback.validate()?;
        let pool = self.pool_manager.pool();

        let result = sqlx::query(
            r#"
            INSERT INTO cashbacks (user_id, bank, category, percent, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(cashback.user_id)
        .bind(&cashback.bank)
        .bind(&cashback.category)
        .bind(cashback.percent)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        let id = RecordId(result.last_insert_rowid());
        info!(
            record_id = %id,
            bank = %cashback.bank,
            category = %cashback.category,
            percent = cashback.percent,
            "Saved cashback"
        );
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_all(&self, user_id: i64) -> Result<Vec<CashbackRow>, StorageError> {
        let pool = self.pool_manager.pool();

        let rows = sqlx::query_as::<_, CashbackRow>(
            r#"
            SELECT bank, category, percent
            FROM cashbacks
            WHERE user_id = ?
            ORDER BY bank ASC, percent DESC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        info!(count = rows.len(), "Listed cashbacks");
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn find_best(
        &self,
        user_id: i64,
        query_text: &str,
    ) -> Result<Vec<CashbackRow>, StorageError> {
        let pool = self.pool_manager.pool();

        let rows = sqlx::query_as::<_, CashbackRow>(
            "SELECT bank, category, percent FROM cashbacks WHERE user_id = ? ORDER BY id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        debug!(scanned = rows.len(), "Scanning cashbacks");

        let matches = query::best_matches(rows, query_text);
        info!(count = matches.len(), "Found cashbacks matching '{}'", query_text);
        Ok(matches)
    }

    #[instrument(skip(self))]
    async fn count(&self, user_id: i64) -> Result<i64, StorageError> {
        let pool = self.pool_manager.pool();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cashbacks WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn clear(&self, user_id: i64) -> Result<u64, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("DELETE FROM cashbacks WHERE user_id = ?")
            .bind(user_id)
            .execute(pool)
            .await?;

        info!(deleted = result.rows_affected(), "Cleared cashbacks");
        Ok(result.rows_affected())
    }
}
