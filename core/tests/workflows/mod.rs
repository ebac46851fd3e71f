// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Workflow tests.
//!
//! - `routine_lifecycle`: add, check off, reopen and remove routine items
//! - `readings_feed`: once-a-day readings fetch with placeholder fallback
//! - `remote_store`: routine items on the hosted backend

mod readings_feed;
mod remote_store;
mod routine_lifecycle;
