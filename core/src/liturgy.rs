// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The liturgical calendar: Easter computus, season boundaries and progress
//! within a season. Everything here is a pure function of civil dates.

mod boundaries;
mod calendar;
mod easter;
mod progress;
mod season;

pub use boundaries::{SeasonBoundaries, advent_start};
pub use calendar::{LiturgicalCalendar, SeasonInfo};
pub use easter::{MAX_YEAR, MIN_YEAR, compute_easter};
pub use progress::{WeekInfo, day_of_season, week_of_season};
pub use season::{LiturgicalColor, Locale, Season};
