// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Routine items kept on a hosted PostgREST-style backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::config::RemoteConfig;
use crate::routine::sort_items;
use crate::{BackendError, RoutineItem, RoutineStore};

const TABLE: &str = "routine_items";

/// [`RoutineStore`] talking to the hosted backend.
#[derive(Debug, Clone)]
pub struct RemoteRoutines {
    client: Client,
    config: RemoteConfig,
}

impl RemoteRoutines {
    /// Creates a new remote store.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: RemoteConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("vigil/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{TABLE}", self.config.url.trim_end_matches('/'))
    }

    fn build_request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, self.table_url())
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    async fn execute(req: RequestBuilder) -> Result<Response, BackendError> {
        let resp = req.send().await?;
        match resp.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(resp),
            status => {
                let body = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(BackendError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}

#[async_trait]
impl RoutineStore for RemoteRoutines {
    async fn list(&self, user_id: &str) -> Result<Vec<RoutineItem>, BackendError> {
        tracing::debug!(user_id, "listing remote routine items");
        let req = self.build_request(Method::GET).query(&[
            ("user_id", format!("eq.{user_id}")),
            ("order", "created_at.asc".to_string()),
        ]);
        let mut items: Vec<RoutineItem> = Self::execute(req).await?.json().await?;
        sort_items(&mut items);
        Ok(items)
    }

    async fn get(&self, user_id: &str, id: &str) -> Result<Option<RoutineItem>, BackendError> {
        let req = self.build_request(Method::GET).query(&[
            ("user_id", format!("eq.{user_id}")),
            ("id", format!("eq.{id}")),
        ]);
        let items: Vec<RoutineItem> = Self::execute(req).await?.json().await?;
        Ok(items.into_iter().next())
    }

    async fn upsert(&self, item: &RoutineItem) -> Result<(), BackendError> {
        tracing::debug!(id = item.id, "upserting remote routine item");
        let req = self
            .build_request(Method::POST)
            .header("Prefer", "resolution=merge-duplicates")
            .json(&[item]);
        Self::execute(req).await?;
        Ok(())
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<bool, BackendError> {
        tracing::debug!(id, "deleting remote routine item");
        let req = self
            .build_request(Method::DELETE)
            .header("Prefer", "return=representation")
            .query(&[
                ("user_id", format!("eq.{user_id}")),
                ("id", format!("eq.{id}")),
            ]);
        let deleted: Vec<RoutineItem> = Self::execute(req).await?.json().await?;
        Ok(!deleted.is_empty())
    }
}
