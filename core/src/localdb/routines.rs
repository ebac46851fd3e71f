// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use crate::routine::sort_items;
use crate::{BackendError, RoutineItem, RoutineStore};

/// [`RoutineStore`] backed by the local database.
#[derive(Debug, Clone)]
pub struct LocalRoutines {
    pool: SqlitePool,
}

impl LocalRoutines {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoutineStore for LocalRoutines {
    async fn list(&self, user_id: &str) -> Result<Vec<RoutineItem>, BackendError> {
        const SQL: &str = "
SELECT id, user_id, title, note, slot, completed_on, created_at
FROM routine_items
WHERE user_id = ?
ORDER BY created_at
";

        let records: Vec<RoutineRecord> = sqlx::query_as(SQL)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        let mut items = records
            .into_iter()
            .map(RoutineItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        sort_items(&mut items);
        Ok(items)
    }

    async fn get(&self, user_id: &str, id: &str) -> Result<Option<RoutineItem>, BackendError> {
        const SQL: &str = "
SELECT id, user_id, title, note, slot, completed_on, created_at
FROM routine_items
WHERE user_id = ? AND id = ?
";

        let record: Option<RoutineRecord> = sqlx::query_as(SQL)
            .bind(user_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        record.map(RoutineItem::try_from).transpose()
    }

    async fn upsert(&self, item: &RoutineItem) -> Result<(), BackendError> {
        const SQL: &str = "
INSERT INTO routine_items (id, user_id, title, note, slot, completed_on, created_at)
VALUES (?, ?, ?, ?, ?, ?, ?)
ON CONFLICT(id) DO UPDATE SET
    user_id      = excluded.user_id,
    title        = excluded.title,
    note         = excluded.note,
    slot         = excluded.slot,
    completed_on = excluded.completed_on,
    created_at   = excluded.created_at
";

        tracing::debug!(id = item.id, "upserting routine item");
        sqlx::query(SQL)
            .bind(&item.id)
            .bind(&item.user_id)
            .bind(&item.title)
            .bind(&item.note)
            .bind(item.slot.as_str())
            .bind(item.completed_on.map(|a| a.to_string()))
            .bind(item.created_at.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<bool, BackendError> {
        tracing::debug!(id, "deleting routine item");
        let result = sqlx::query("DELETE FROM routine_items WHERE user_id = ? AND id = ?")
            .bind(user_id)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, FromRow)]
struct RoutineRecord {
    id: String,
    user_id: String,
    title: String,
    note: Option<String>,
    slot: String,
    completed_on: Option<String>,
    created_at: String,
}

impl TryFrom<RoutineRecord> for RoutineItem {
    type Error = BackendError;

    fn try_from(record: RoutineRecord) -> Result<Self, Self::Error> {
        let slot = record.slot.parse().map_err(BackendError::Decode)?;
        Ok(RoutineItem {
            id: record.id,
            user_id: record.user_id,
            title: record.title,
            note: record.note,
            slot,
            completed_on: record.completed_on.map(|a| a.parse()).transpose()?,
            created_at: record.created_at.parse()?,
        })
    }
}
