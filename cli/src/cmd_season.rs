// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use vigil_core::{DateAnchor, Vigil};

use crate::season_formatter::{SeasonColumn, SeasonRow, WeekColumn};
use crate::util::{ArgOutputFormat, arg_date, get_date};

#[derive(Debug, Clone, Copy)]
pub struct CmdSeason {
    pub date: DateAnchor,
    pub output_format: ArgOutputFormat,
}

impl CmdSeason {
    pub const NAME: &str = "season";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("s")
            .about("Show the liturgical season of a date")
            .arg(arg_date())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: get_date(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, vigil: &Vigil) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "resolving season...");
        let date = self.date.resolve(vigil.today())?;
        let info = vigil.season_info(Some(date))?;
        println!(
            "{}",
            SeasonColumn::format(self.output_format, &[SeasonRow { date, info }])
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdWeek {
    pub date: DateAnchor,
    pub output_format: ArgOutputFormat,
}

impl CmdWeek {
    pub const NAME: &str = "week";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the week of the liturgical season of a date")
            .arg(arg_date())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: get_date(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, vigil: &Vigil) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "estimating liturgical week...");
        let date = self.date.resolve(vigil.today())?;
        let info = vigil.week_info(Some(date))?;
        println!("{}", WeekColumn::format(self.output_format, &[info]));
        Ok(())
    }
}
