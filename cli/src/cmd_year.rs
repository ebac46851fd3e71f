// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use vigil_core::{MAX_YEAR, MIN_YEAR, Vigil};

use crate::season_formatter::{YearColumn, YearRow};
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdYear {
    pub year: i16,
    pub output_format: ArgOutputFormat,
}

impl CmdYear {
    pub const NAME: &str = "year";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the dates of the liturgical seasons in a year")
            .arg(
                arg!(year: <YEAR> "The civil year")
                    .value_parser(value_parser!(i16).range(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR))),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let year = match matches.get_one::<i16>("year") {
            Some(year) => *year,
            _ => unreachable!(),
        };

        Self {
            year,
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, vigil: &Vigil) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deriving season boundaries...");
        let boundaries = vigil.boundaries(self.year)?;
        let rows = YearRow::from_boundaries(&boundaries);
        println!("{}", YearColumn::format(self.output_format, &rows));
        Ok(())
    }
}
