//! SQLite-backed store shared by the catalog and the registry.
//!
//! Schema:
//!   cities(id INTEGER PRIMARY KEY, city TEXT, lat REAL, lng REAL)
//!   users_cities(user_id INTEGER, city_id INTEGER REFERENCES cities(id))
//!
//! The `cities` table is populated by an external seeding process; this
//! module only guarantees the tables exist. `users_cities` carries no
//! uniqueness constraint — duplicate associations are accepted behavior.

use crate::error::Error;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

/// Handle to the SQLite database. Cheap to clone; all clones share one pool.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (or create) the database file at `path` and apply the schema.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(opts).await?;
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Open an in-memory database (for testing).
    pub async fn open_in_memory() -> Result<Self, Error> {
        // A single connection keeps every query on the same :memory: instance.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS cities (
                 id INTEGER PRIMARY KEY,
                 city TEXT NOT NULL,
                 lat REAL NOT NULL,
                 lng REAL NOT NULL
             )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users_cities (
                 user_id INTEGER NOT NULL,
                 city_id INTEGER NOT NULL,
                 FOREIGN KEY(city_id) REFERENCES cities(id)
             )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_creates_file_and_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("atlas.db");

        let store = Store::open(&path).await.unwrap();
        assert!(path.exists());

        // Schema is queryable even before any seeding.
        let rows = sqlx::query("SELECT * FROM cities")
            .fetch_all(store.pool())
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_open_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("atlas.db");

        {
            let store = Store::open(&path).await.unwrap();
            sqlx::query("INSERT INTO cities (city, lat, lng) VALUES ('Oslo', 59.9139, 10.7522)")
                .execute(store.pool())
                .await
                .unwrap();
        }

        // Reopening must not clobber existing rows.
        let store = Store::open(&path).await.unwrap();
        let rows = sqlx::query("SELECT * FROM cities")
            .fetch_all(store.pool())
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }
}
