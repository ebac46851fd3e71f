// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{str::FromStr, sync::OnceLock};

use jiff::Span;
use jiff::civil::Date;
use regex::Regex;

/// A civil date given either absolutely or relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateAnchor {
    /// A number of days in the future or past.
    InDays(i64),

    /// A specific date.
    Date(Date),
}

impl DateAnchor {
    /// Represents the current date.
    pub fn today() -> Self {
        DateAnchor::InDays(0)
    }

    /// Represents tomorrow, which is one day after today.
    pub fn tomorrow() -> Self {
        DateAnchor::InDays(1)
    }

    /// Represents yesterday, which is one day before today.
    pub fn yesterday() -> Self {
        DateAnchor::InDays(-1)
    }

    /// Resolves the anchor against `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset leaves the civil date range.
    pub fn resolve(self, today: Date) -> Result<Date, jiff::Error> {
        match self {
            DateAnchor::InDays(n) => today.checked_add(Span::new().try_days(n)?),
            DateAnchor::Date(date) => Ok(date),
        }
    }
}

impl Default for DateAnchor {
    fn default() -> Self {
        Self::today()
    }
}

impl FromStr for DateAnchor {
    type Err = String;

    fn from_str(t: &str) -> Result<Self, Self::Err> {
        // Handle keywords
        match t.trim().to_ascii_lowercase().as_str() {
            "yesterday" => return Ok(Self::yesterday()),
            "tomorrow" => return Ok(Self::tomorrow()),
            "today" | "now" => return Ok(Self::today()),
            _ => {}
        }

        if let Ok(date) = t.trim().parse::<Date>() {
            Ok(Self::Date(date))
        } else if let Some(days) = parse_days(t) {
            Ok(Self::InDays(days))
        } else {
            Err(format!("Invalid date: {t}"))
        }
    }
}

/// Parse days from string formats like "in 10 days", "10d", "+3d", "-2d", "3 days ago"
fn parse_days(s: &str) -> Option<i64> {
    const RE: &str = r"(?i)^\s*(?:in\s*)?([+-]?\d+)\s*d(?:ays?)?(\s+ago)?\s*$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).expect("days pattern must be valid"));
    let captures = re.captures(s)?;
    let num = captures[1].parse::<i64>().ok()?;
    if captures.get(2).is_some() {
        Some(-num)
    } else {
        Some(num)
    }
}
