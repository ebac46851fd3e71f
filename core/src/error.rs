// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::liturgy::{MAX_YEAR, MIN_YEAR};

/// Errors raised by the liturgical calendar for out-of-domain input.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// The Gregorian computus is only meaningful from 1583 onwards, and every
    /// derived boundary must stay inside the supported civil date range.
    #[error("year {year} is outside the supported range {min}..={max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange {
        /// The rejected year.
        year: i16,
    },

    /// Civil date arithmetic overflowed.
    #[error("date arithmetic failed: {0}")]
    Arithmetic(#[from] jiff::Error),
}

/// Errors raised by the routine stores, the daily cache and the readings feed.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Local database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Transport level HTTP error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The server answered with an unexpected status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if readable.
        body: String,
    },

    /// A stored or received payload could not be decoded.
    #[error("failed to decode payload: {0}")]
    Decode(String),

    /// No routine item matches the given id.
    #[error("routine item not found: {0}")]
    NotFound(String),

    /// More than one routine item matches the given id prefix.
    #[error("id prefix `{0}` matches more than one routine item")]
    Ambiguous(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<jiff::Error> for BackendError {
    fn from(e: jiff::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
