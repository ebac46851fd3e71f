// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::liturgy::{LiturgicalColor, Season};

/// The 1-indexed day within a season, counting the start day as day 1.
///
/// Both arguments are civil dates, so time-of-day never shifts the result.
pub fn day_of_season(start: Date, today: Date) -> i32 {
    // Date - Date spans are computed in days and cannot fail
    (today - start).get_days().abs() + 1
}

/// The 1-indexed week within a season for the given day of season.
pub const fn week_of_season(day_of_season: i32) -> i32 {
    (day_of_season + 6) / 7
}

/// Lightweight summary for season badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct WeekInfo {
    /// The active season.
    pub season: Season,

    /// Localized name of the season.
    pub season_name: &'static str,

    /// Color of the season.
    pub color: LiturgicalColor,

    /// The 1-indexed week within the season.
    pub week: i32,

    /// Whether the day is a feast. Feast detection is not implemented, so this
    /// is always false.
    pub is_feast: bool,
}
