// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of Vigil: the liturgical calendar, the daily routine and the
//! collaborators around them.

mod clock;
mod config;
mod daily_cache;
mod datetime;
mod error;
mod liturgy;
mod localdb;
mod readings;
mod remote;
mod routine;
mod vigil;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::{APP_NAME, Config, DEFAULT_USER_ID, ReadingsConfig, RemoteConfig};
pub use crate::daily_cache::{DailyCache, MemoryDailyCache};
pub use crate::datetime::DateAnchor;
pub use crate::error::{BackendError, CalendarError};
pub use crate::liturgy::{
    LiturgicalCalendar, LiturgicalColor, Locale, MAX_YEAR, MIN_YEAR, Season, SeasonBoundaries,
    SeasonInfo, WeekInfo, advent_start, compute_easter, day_of_season, week_of_season,
};
pub use crate::localdb::{LocalDb, LocalRoutines, SqliteDailyCache};
pub use crate::readings::{DailyReadings, Reading, ReadingsFeed};
pub use crate::remote::RemoteRoutines;
pub use crate::routine::{RoutineDraft, RoutineItem, RoutineSlot, RoutineStore};
pub use crate::vigil::Vigil;
