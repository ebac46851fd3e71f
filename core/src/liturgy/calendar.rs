// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::CalendarError;
use crate::liturgy::{
    LiturgicalColor, Locale, Season, SeasonBoundaries, WeekInfo, day_of_season, week_of_season,
};

/// The season active on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SeasonInfo {
    /// The active season.
    pub season: Season,

    /// Localized name of the season.
    pub name: &'static str,

    /// Color of the season.
    pub color: LiturgicalColor,

    /// The day this season instance began on, never after the query date.
    pub start: Date,

    /// Canonical length of the season in days.
    pub nominal_total_days: i32,
}

impl SeasonInfo {
    /// The 1-indexed day within the season on `today`.
    pub fn day_of_season(&self, today: Date) -> i32 {
        day_of_season(self.start, today)
    }
}

/// Query surface of the liturgical calendar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LiturgicalCalendar {
    locale: Locale,
}

impl LiturgicalCalendar {
    /// Creates a calendar producing display names in the given locale.
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The locale used for display names.
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Boundaries of all seasons touching the given civil year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] for unsupported years.
    pub fn boundaries(&self, year: i16) -> Result<SeasonBoundaries, CalendarError> {
        SeasonBoundaries::for_year(year)
    }

    /// The season active on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] for dates outside the
    /// supported years.
    pub fn season_info(&self, date: Date) -> Result<SeasonInfo, CalendarError> {
        let boundaries = SeasonBoundaries::for_year(date.year())?;
        let (season, start) = boundaries.resolve(date);
        Ok(SeasonInfo {
            season,
            name: season.name(self.locale),
            color: season.color(),
            start,
            nominal_total_days: season.nominal_total_days(),
        })
    }

    /// Season badge information for `date`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] for dates outside the
    /// supported years.
    pub fn week_info(&self, date: Date) -> Result<WeekInfo, CalendarError> {
        let info = self.season_info(date)?;
        Ok(WeekInfo {
            season: info.season,
            season_name: info.name,
            color: info.color,
            week: week_of_season(info.day_of_season(date)),
            is_feast: false,
        })
    }
}
