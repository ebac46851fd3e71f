// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vigil_core::{APP_NAME, Vigil};

use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_routine::{
    CmdRoutineAdd, CmdRoutineDone, CmdRoutineList, CmdRoutineRemove, CmdRoutineUndo,
};
use crate::cmd_season::{CmdSeason, CmdWeek};
use crate::cmd_year::CmdYear;
use crate::config::parse_config;

/// Run the Vigil command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Keep the liturgical seasons and your daily devotional routine.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $VIGIL_CONFIG, then to \
$XDG_CONFIG_HOME/vigil/config.toml on Linux and MacOS, %LOCALAPPDATA%/vigil/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDashboard::command())
            .subcommand(CmdSeason::command())
            .subcommand(CmdWeek::command())
            .subcommand(CmdYear::command())
            .subcommand(
                Command::new("routine")
                    .alias("r")
                    .about("Manage your daily routine")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdRoutineAdd::command())
                    .subcommand(CmdRoutineList::command())
                    .subcommand(CmdRoutineDone::command())
                    .subcommand(CmdRoutineUndo::command())
                    .subcommand(CmdRoutineRemove::command()),
            )
            .subcommand(CmdRoutineDone::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some((CmdSeason::NAME, matches)) => Season(CmdSeason::from(matches)),
            Some((CmdWeek::NAME, matches)) => Week(CmdWeek::from(matches)),
            Some((CmdYear::NAME, matches)) => Year(CmdYear::from(matches)),
            Some(("routine", matches)) => match matches.subcommand() {
                Some((CmdRoutineAdd::NAME, matches)) => RoutineAdd(CmdRoutineAdd::from(matches)),
                Some((CmdRoutineList::NAME, matches)) => {
                    RoutineList(CmdRoutineList::from(matches))
                }
                Some((CmdRoutineDone::NAME, matches)) => {
                    RoutineDone(CmdRoutineDone::from(matches))
                }
                Some((CmdRoutineUndo::NAME, matches)) => {
                    RoutineUndo(CmdRoutineUndo::from(matches))
                }
                Some((CmdRoutineRemove::NAME, matches)) => {
                    RoutineRemove(CmdRoutineRemove::from(matches))
                }
                _ => unreachable!(),
            },
            Some((CmdRoutineDone::NAME, matches)) => RoutineDone(CmdRoutineDone::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Dashboard(CmdDashboard),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the dashboard
    Dashboard(CmdDashboard),

    /// Show the season of a date
    Season(CmdSeason),

    /// Show the liturgical week of a date
    Week(CmdWeek),

    /// Show the season boundaries of a year
    Year(CmdYear),

    /// Add a routine item
    RoutineAdd(CmdRoutineAdd),

    /// List the routine
    RoutineList(CmdRoutineList),

    /// Check routine items off
    RoutineDone(CmdRoutineDone),

    /// Clear check marks
    RoutineUndo(CmdRoutineUndo),

    /// Remove routine items
    RoutineRemove(CmdRoutineRemove),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Dashboard(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            Season(a)        => Self::run_with(config, |x| a.run(x).boxed()).await,
            Week(a)          => Self::run_with(config, |x| a.run(x).boxed()).await,
            Year(a)          => Self::run_with(config, |x| a.run(x).boxed()).await,
            RoutineAdd(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            RoutineList(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            RoutineDone(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            RoutineUndo(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            RoutineRemove(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Vigil) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let vigil = Vigil::new(core_config).await?;

        f(&vigil).await?;

        vigil.close().await?;
        Ok(())
    }
}
