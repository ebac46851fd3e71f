// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::Mutex;

use jiff::civil::Date;
use jiff::{Span, Zoned};

/// Source of the current time.
pub trait Clock: fmt::Debug + Send + Sync {
    /// The current zoned time.
    fn now(&self) -> Zoned;

    /// The current civil date in the clock's own time zone.
    fn today(&self) -> Date {
        self.now().date()
    }
}

/// Wall clock in the system time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<Zoned>,
}

impl FixedClock {
    /// Creates a clock frozen at `now`.
    pub fn new(now: Zoned) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Replaces the current time.
    pub fn set(&self, now: Zoned) {
        *self.lock() = now;
    }

    /// Moves the clock forward (or backward for negative values) by calendar days,
    /// keeping the wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns an error if the result leaves the supported time range.
    pub fn advance_days(&self, days: i64) -> Result<(), jiff::Error> {
        let mut now = self.lock();
        *now = now.checked_add(Span::new().try_days(days)?)?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Zoned> {
        // a poisoned lock still holds a valid time
        self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.lock().clone()
    }
}
