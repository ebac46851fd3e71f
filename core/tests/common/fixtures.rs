// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;
use std::sync::Arc;

use jiff::Zoned;
use jiff::civil::date;
use jiff::tz::TimeZone;
use vigil_core::{Config, FixedClock, RoutineDraft, RoutineSlot};

/// Creates a test configuration storing state in `state_dir`.
#[must_use]
pub fn test_config(state_dir: &Path) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        user_id: "tester".to_string(),
        ..Default::default()
    }
}

/// A zoned time in a fixed UTC-3 offset, where late evenings already belong to
/// the next UTC day.
#[must_use]
pub fn zoned(y: i16, m: i8, d: i8, hour: i8) -> Zoned {
    date(y, m, d)
        .at(hour, 0, 0, 0)
        .to_zoned(TimeZone::fixed(jiff::tz::offset(-3)))
        .expect("fixture time must be valid")
}

/// A shared clock frozen at the given time.
#[must_use]
pub fn fixed_clock(now: Zoned) -> Arc<FixedClock> {
    Arc::new(FixedClock::new(now))
}

/// Creates a routine draft with the given title.
#[must_use]
pub fn test_draft(title: &str, slot: RoutineSlot) -> RoutineDraft {
    RoutineDraft {
        title: title.to_string(),
        note: None,
        slot,
    }
}
