// src/history/mod.rs
// Per-session calculation history backed by SQLite. The store is an optional,
// best-effort side-log: callers log failures and keep serving.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::time::Duration;

use crate::config::CONFIG;

/// One recorded calculation, newest-first when read back.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
    pub ts: i64,
}

impl HistoryEntry {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.ts, 0)
    }
}

#[derive(Clone)]
pub struct HistoryStore {
    pool: SqlitePool,
    /// Rows kept per session; older rows are pruned on insert.
    cap: i64,
}

impl HistoryStore {
    pub fn new(pool: SqlitePool, cap: i64) -> Self {
        Self { pool, cap }
    }

    /// Connect with the configured pool settings and initialize the schema.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            // SQLite is single-writer, but can have multiple readers
            .max_connections(CONFIG.sqlite_max_connections as u32)
            .acquire_timeout(Duration::from_secs(10))
            .connect(database_url)
            .await
            .with_context(|| format!("Failed to connect to database: {database_url}"))?;

        let store = Self::new(pool, CONFIG.history_cap);
        store.init_schema().await?;
        Ok(store)
    }

    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS calc_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id TEXT NOT NULL,
                expression TEXT NOT NULL,
                result TEXT NOT NULL,
                ts INTEGER NOT NULL DEFAULT (strftime('%s','now'))
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create calc_history table")?;
        Ok(())
    }

    /// Append one calculation for a session, then prune the session down to
    /// the configured cap.
    pub async fn record(&self, session_id: &str, expression: &str, result: &str) -> Result<()> {
        sqlx::query("INSERT INTO calc_history (session_id, expression, result) VALUES (?, ?, ?)")
            .bind(session_id)
            .bind(expression)
            .bind(result)
            .execute(&self.pool)
            .await
            .context("Failed to record calculation")?;

        sqlx::query(
            r#"
            DELETE FROM calc_history
            WHERE session_id = ?
              AND id NOT IN (
                  SELECT id FROM calc_history
                  WHERE session_id = ?
                  ORDER BY id DESC
                  LIMIT ?
              )
            "#,
        )
        .bind(session_id)
        .bind(session_id)
        .bind(self.cap)
        .execute(&self.pool)
        .await
        .context("Failed to prune calculation history")?;

        Ok(())
    }

    /// Most recent entries for a session, newest first.
    pub async fn recent(&self, session_id: &str, limit: i64) -> Result<Vec<HistoryEntry>> {
        let rows = sqlx::query(
            "SELECT expression, result, ts FROM calc_history WHERE session_id = ? ORDER BY id DESC LIMIT ?",
        )
        .bind(session_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load calculation history")?;

        Ok(rows
            .into_iter()
            .map(|row| HistoryEntry {
                expression: row.get(0),
                result: row.get(1),
                ts: row.get(2),
            })
            .collect())
    }

    /// Drop all rows for a session.
    pub async fn clear(&self, session_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM calc_history WHERE session_id = ?")
            .bind(session_id)
            .execute(&self.pool)
            .await
            .context("Failed to clear calculation history")?;
        Ok(())
    }
}
