//! SQLite-backed [`PreferenceStore`].
//!
//! A single `preferences` table holds small string values by key. The
//! database is created on first connect (WAL journal, parent directory
//! created if needed) and the schema is applied idempotently.

use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use super::PreferenceStore;

/// SQLite implementation of the [`PreferenceStore`] trait.
pub struct SqlitePreferences {
    pool: SqlitePool,
}

impl SqlitePreferences {
    /// Open (or create) the preference database at `path`.
    pub async fn connect(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PreferenceStore for SqlitePreferences {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO preferences (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get::<String, _>("value")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_connect_creates_database_and_schema() {
        let tmp = TempDir::new().unwrap();
        let db_path = tmp.path().join("data/prefs.sqlite");
        let prefs = SqlitePreferences::connect(&db_path).await.unwrap();
        assert!(db_path.exists());
        assert!(prefs.get("photos").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let tmp = TempDir::new().unwrap();
        let prefs = SqlitePreferences::connect(&tmp.path().join("p.sqlite"))
            .await
            .unwrap();
        prefs.set("photos", "[]").await.unwrap();
        prefs.set("photos", r#"[{"filepath":"1.jpeg"}]"#).await.unwrap();
        assert_eq!(
            prefs.get("photos").await.unwrap().as_deref(),
            Some(r#"[{"filepath":"1.jpeg"}]"#)
        );
    }

    #[tokio::test]
    async fn test_values_survive_reconnect() {
        let tmp = TempDir::new().unwrap();
        let db_path = tmp.path().join("p.sqlite");
        {
            let prefs = SqlitePreferences::connect(&db_path).await.unwrap();
            prefs.set("photos", "[1,2]").await.unwrap();
        }
        let prefs = SqlitePreferences::connect(&db_path).await.unwrap();
        assert_eq!(prefs.get("photos").await.unwrap().as_deref(), Some("[1,2]"));
    }
}
