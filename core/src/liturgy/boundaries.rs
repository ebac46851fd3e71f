// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::Date;

use crate::CalendarError;
use crate::liturgy::Season;
use crate::liturgy::easter::{check_year, compute_easter};

/// Start dates of the seasons touching a civil year.
///
/// Advent and Christmastide straddle the year boundary, so besides the dates of
/// the civil year itself this also carries the tail of the Christmastide that
/// began on December 25 of the previous year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SeasonBoundaries {
    /// The civil year these boundaries were computed for.
    pub year: i16,

    /// December 25 of the previous year.
    pub previous_christmas: Date,

    /// January 13 of this year, closing the Christmastide begun the year before.
    pub christmastide_close: Date,

    /// January 14, the nominal start of Ordinary Time before Lent.
    pub ordinary_time_start: Date,

    /// Easter minus 46 days.
    pub ash_wednesday: Date,

    /// Easter Sunday.
    pub easter: Date,

    /// Easter plus 49 days.
    pub pentecost: Date,

    /// The day after Pentecost, where Ordinary Time resumes.
    pub ordinary_time_resume: Date,

    /// The fourth Sunday before Christmas.
    pub advent_start: Date,

    /// December 25.
    pub christmas: Date,

    /// January 13 of the next year, closing the Christmastide begun this year.
    ///
    /// NOTE: a fixed date standing in for the movable feast.
    pub baptism_of_the_lord: Date,
}

impl SeasonBoundaries {
    /// Derive all boundaries for the given civil year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the computus does not apply
    /// to `year`.
    pub fn for_year(year: i16) -> Result<Self, CalendarError> {
        check_year(year)?;

        let easter = compute_easter(year)?;
        let christmas = Date::new(year, 12, 25)?;
        let pentecost = easter.checked_add(49.days())?;
        Ok(Self {
            year,
            previous_christmas: Date::new(year - 1, 12, 25)?,
            christmastide_close: baptism_of_the_lord(year - 1)?,
            ordinary_time_start: Date::new(year, 1, 14)?,
            ash_wednesday: easter.checked_sub(46.days())?,
            easter,
            pentecost,
            ordinary_time_resume: pentecost.tomorrow()?,
            advent_start: advent_start(christmas)?,
            christmas,
            baptism_of_the_lord: baptism_of_the_lord(year)?,
        })
    }

    /// Classify a date of this civil year, returning the season and the day
    /// that season instance began on.
    ///
    /// Branches are evaluated in a fixed order since neighboring seasons share
    /// their boundary dates as endpoints.
    pub fn resolve(&self, date: Date) -> (Season, Date) {
        debug_assert_eq!(date.year(), self.year, "date must belong to the boundary year");

        if self.advent_start <= date && date < self.christmas {
            (Season::Advent, self.advent_start)
        } else if date >= self.christmas {
            (Season::ChristmasTime, self.christmas)
        } else if date <= self.christmastide_close {
            (Season::ChristmasTime, self.previous_christmas)
        } else if self.ash_wednesday <= date && date < self.easter {
            (Season::Lent, self.ash_wednesday)
        } else if self.easter <= date && date <= self.pentecost {
            (Season::EasterTime, self.easter)
        } else if date < self.ash_wednesday {
            (Season::OrdinaryTime, self.ordinary_time_start)
        } else {
            (Season::OrdinaryTime, self.ordinary_time_resume)
        }
    }
}

/// The fourth Sunday before the given Christmas day.
///
/// # Errors
///
/// Returns an error if the subtraction leaves the civil date range.
pub fn advent_start(christmas: Date) -> Result<Date, CalendarError> {
    let weekday = i64::from(christmas.weekday().to_sunday_zero_offset());
    let back = if weekday == 0 { 28 } else { 21 + weekday };
    Ok(christmas.checked_sub(back.days())?)
}

/// The close of the Christmastide that begins on December 25 of
/// `liturgical_year`, which always falls in the following civil year.
fn baptism_of_the_lord(liturgical_year: i16) -> Result<Date, CalendarError> {
    Ok(Date::new(liturgical_year + 1, 1, 13)?)
}
