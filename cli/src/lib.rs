// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of Vigil.

mod cli;
mod cmd_dashboard;
mod cmd_generate_completion;
mod cmd_routine;
mod cmd_season;
mod cmd_year;
mod config;
mod routine_formatter;
mod season_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
