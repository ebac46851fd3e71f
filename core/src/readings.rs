// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The scripture readings of the day, fetched from an external feed.

use std::time::Duration;

use jiff::civil::Date;
use reqwest::Client;

use crate::BackendError;
use crate::config::ReadingsConfig;

/// A single scripture passage.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Reading {
    /// Book, chapter and verses, e.g. "Jn 20:1-9".
    pub reference: String,

    /// The passage itself.
    #[serde(default)]
    pub text: String,
}

/// The readings for one day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DailyReadings {
    /// The day these readings belong to.
    pub date: Date,

    /// First reading.
    pub first_reading: Reading,

    /// Responsorial psalm.
    pub psalm: Reading,

    /// Second reading, only on Sundays and solemnities.
    #[serde(default)]
    pub second_reading: Option<Reading>,

    /// Gospel.
    pub gospel: Reading,

    /// Whether this is the static fallback rather than fetched content.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub placeholder: bool,
}

impl DailyReadings {
    /// Placeholder shown when the feed cannot be reached.
    pub fn placeholder(date: Date) -> Self {
        const UNAVAILABLE: &str = "Readings are unavailable right now.";
        let reading = |reference: &str| Reading {
            reference: reference.to_string(),
            text: UNAVAILABLE.to_string(),
        };

        Self {
            date,
            first_reading: reading("First Reading"),
            psalm: reading("Psalm"),
            second_reading: None,
            gospel: reading("Gospel"),
            placeholder: true,
        }
    }

    /// All passages in liturgical order, with their headings.
    pub fn passages(&self) -> Vec<(&'static str, &Reading)> {
        let mut passages = vec![("First Reading", &self.first_reading), ("Psalm", &self.psalm)];
        if let Some(second) = &self.second_reading {
            passages.push(("Second Reading", second));
        }
        passages.push(("Gospel", &self.gospel));
        passages
    }
}

/// Client for the readings feed.
#[derive(Debug, Clone)]
pub struct ReadingsFeed {
    client: Client,
    url: Option<String>,
}

impl ReadingsFeed {
    /// Creates a feed client. Without a configured URL every fetch fails.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: Option<&ReadingsConfig>) -> Result<Self, BackendError> {
        let timeout = config.map_or(ReadingsConfig::DEFAULT_TIMEOUT_SECS, |a| a.timeout_secs);
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .user_agent(concat!("vigil/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: config.map(|a| a.url.clone()),
        })
    }

    /// Fetches the readings for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if no feed is configured, the request fails or the
    /// response cannot be decoded.
    pub async fn fetch(&self, date: Date) -> Result<DailyReadings, BackendError> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| BackendError::Http("No readings feed configured".to_string()))?;

        tracing::debug!(url, %date, "fetching daily readings");
        let resp = self
            .client
            .get(url)
            .query(&[("date", date.to_string())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mut readings: DailyReadings = resp.json().await?;
        readings.placeholder = false;
        Ok(readings)
    }
}
