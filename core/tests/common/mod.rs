// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Temporary directory management with auto-cleanup

mod fixtures;
mod temp_state;

#[allow(unused_imports)]
pub use fixtures::{fixed_clock, test_config, test_draft, zoned};
#[allow(unused_imports)]
pub use temp_state::{TempState, setup_temp_state};
