// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Values that are computed or fetched at most once per day.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use jiff::civil::Date;
use tokio::sync::Mutex;

use crate::BackendError;

/// A cache whose entries are only valid on the day they were stored.
///
/// `today` is always passed in by the caller, so day rollover is driven by the
/// injected [`crate::Clock`] rather than by the cache itself.
#[async_trait]
pub trait DailyCache: fmt::Debug + Send + Sync {
    /// Returns the value stored under `key` for `today`, or `None` on a miss.
    async fn get(&self, key: &str, today: Date) -> Result<Option<String>, BackendError>;

    /// Stores `value` under `key` for `today`, replacing any older day.
    async fn put(&self, key: &str, today: Date, value: &str) -> Result<(), BackendError>;
}

/// Process-local [`DailyCache`].
#[derive(Debug, Default)]
pub struct MemoryDailyCache {
    entries: Mutex<HashMap<String, (Date, String)>>,
}

impl MemoryDailyCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DailyCache for MemoryDailyCache {
    async fn get(&self, key: &str, today: Date) -> Result<Option<String>, BackendError> {
        let entries = self.entries.lock().await;
        Ok(entries
            .get(key)
            .filter(|(day, _)| *day == today)
            .map(|(_, value)| value.clone()))
    }

    async fn put(&self, key: &str, today: Date, value: &str) -> Result<(), BackendError> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), (today, value.to_string()));
        Ok(())
    }
}
