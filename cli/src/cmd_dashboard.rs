// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use vigil_core::Vigil;

use crate::cmd_routine::CmdRoutineList;
use crate::season_formatter::{SeasonRow, season_badge};
use crate::util::ArgOutputFormat;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the dashboard, which includes the season, your routine and today's readings")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDashboard
    }

    /// Show the dashboard with the season badge, routine and readings.
    pub async fn run(self, vigil: &Vigil) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");

        Self::show_season(vigil)?;
        println!();

        Self::show_routine(vigil).await?;
        println!();

        Self::show_readings(vigil).await;
        Ok(())
    }

    fn show_season(vigil: &Vigil) -> Result<(), Box<dyn Error>> {
        let date = vigil.today();
        let info = vigil.season_info(Some(date))?;
        println!("✝️ {}", date.strftime("%A, %B %-d, %Y").to_string().bold());
        println!(" {}", season_badge(&SeasonRow { date, info }));
        Ok(())
    }

    async fn show_routine(vigil: &Vigil) -> Result<(), Box<dyn Error>> {
        println!("📿 {}", "Routine".bold());
        CmdRoutineList::list(vigil, ArgOutputFormat::Table).await
    }

    async fn show_readings(vigil: &Vigil) {
        let readings = vigil.readings().await;
        println!("📖 {}", "Readings".bold());
        if readings.placeholder {
            println!("{}", "Readings are unavailable right now".italic());
            return;
        }

        for (heading, reading) in readings.passages() {
            println!(" {} {} {}", "►".green(), heading.italic(), reading.reference);
        }
    }
}
