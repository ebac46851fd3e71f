// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use colored::Color;
use vigil_core::{DateAnchor, LiturgicalColor};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn arg_date() -> Arg {
    arg!(date: [DATE] "The date to look up, defaults to today")
        .long_help(
            "\
The date to look up. Accepts `today`, `tomorrow`, `yesterday`, `YYYY-MM-DD`, \
`in N days`, `N days ago`, `+Nd` and `-Nd`. Defaults to today.",
        )
        .value_parser(|s: &str| s.parse::<DateAnchor>())
        .allow_hyphen_values(true)
}

pub fn get_date(matches: &ArgMatches) -> DateAnchor {
    matches
        .get_one::<DateAnchor>("date")
        .copied()
        .unwrap_or_default()
}

/// Terminal color of a liturgical color.
pub fn terminal_color(color: LiturgicalColor) -> Color {
    match color {
        LiturgicalColor::Violet => Color::Magenta,
        LiturgicalColor::White => Color::BrightWhite,
        LiturgicalColor::Green => Color::Green,
    }
}
