// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use jiff::civil::Date;
use sqlx::SqlitePool;

use crate::{BackendError, DailyCache};

/// [`DailyCache`] persisted in the local database, so it survives restarts.
#[derive(Debug, Clone)]
pub struct SqliteDailyCache {
    pool: SqlitePool,
}

impl SqliteDailyCache {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DailyCache for SqliteDailyCache {
    async fn get(&self, key: &str, today: Date) -> Result<Option<String>, BackendError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM daily_cache WHERE key = ? AND day = ?")
                .bind(key)
                .bind(today.to_string())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(value,)| value))
    }

    async fn put(&self, key: &str, today: Date, value: &str) -> Result<(), BackendError> {
        const SQL: &str = "
INSERT INTO daily_cache (key, day, value) VALUES (?, ?, ?)
ON CONFLICT(key) DO UPDATE SET day = excluded.day, value = excluded.value
";

        tracing::debug!(key, %today, "storing daily cache entry");
        sqlx::query(SQL)
            .bind(key)
            .bind(today.to_string())
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
