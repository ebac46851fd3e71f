// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod daily_cache;
mod routines;

use std::error::Error;
use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub use crate::localdb::daily_cache::SqliteDailyCache;
pub use crate::localdb::routines::LocalRoutines;

/// The local SQLite database holding routine items and the daily cache.
#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,

    pub routines: LocalRoutines,
    pub daily_cache: SqliteDailyCache,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let options = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            SqliteConnectOptions::new()
                .filename(filename.to_str().ok_or("Invalid path encoding")?)
                .create_if_missing(true)
        } else {
            tracing::info!("connecting to in-memory SQLite database");
            SqliteConnectOptions::new().in_memory(true)
        };

        let pool_options = if filename.is_some() {
            SqlitePoolOptions::new()
        } else {
            // an in-memory database lives and dies with its single connection
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| format!("Failed to connect to SQLite database: {e}"))?;

        sqlx::migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await
            .map_err(|e| format!("Failed to run migrations: {e}"))?;

        let routines = LocalRoutines::new(pool.clone());
        let daily_cache = SqliteDailyCache::new(pool.clone());
        Ok(LocalDb {
            pool,
            routines,
            daily_cache,
        })
    }

    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("closing database connection");
        self.pool.close().await;
        Ok(())
    }
}
