// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::CalendarError;

/// The first year of the Gregorian calendar for which the computus applies.
pub const MIN_YEAR: i16 = 1583;

/// The last year whose boundaries (reaching into January of the next year)
/// are still representable as civil dates.
pub const MAX_YEAR: i16 = 9998;

pub(crate) fn check_year(year: i16) -> Result<(), CalendarError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::YearOutOfRange { year })
    }
}

/// Computes the date of Easter Sunday with the anonymous Gregorian algorithm
/// (Meeus/Jones/Butcher).
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] for years before 1583 or after
/// [`MAX_YEAR`].
#[allow(clippy::cast_possible_truncation)]
pub fn compute_easter(year: i16) -> Result<Date, CalendarError> {
    check_year(year)?;

    let y = i32::from(year);
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;

    let n = h + l - 7 * m + 114;
    let month = n / 31; // 3 or 4
    let day = n % 31 + 1;
    Ok(Date::new(year, month as i8, day as i8)?)
}
