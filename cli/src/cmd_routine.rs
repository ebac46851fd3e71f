// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use vigil_core::{RoutineDraft, RoutineItem, RoutineSlot, Vigil};

use crate::routine_formatter::RoutineFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone)]
pub struct CmdRoutineAdd {
    pub title: String,
    pub note: Option<String>,
    pub slot: Option<RoutineSlot>,
    pub output_format: ArgOutputFormat,
}

impl CmdRoutineAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add an item to your daily routine")
            .arg(arg!(title: <TITLE> "Title of the routine item"))
            .arg(arg!(--note <NOTE> "A note shown alongside the item"))
            .arg(
                arg!(--slot <SLOT> "Time of day of the item, defaults to morning")
                    .value_parser(value_parser!(RoutineSlot)),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let title = match matches.get_one::<String>("title") {
            Some(title) => title.clone(),
            _ => unreachable!(),
        };

        Self {
            title,
            note: matches.get_one("note").cloned(),
            slot: matches.get_one("slot").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, vigil: &Vigil) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding routine item...");
        let draft = RoutineDraft {
            title: self.title,
            note: self.note,
            slot: self.slot.unwrap_or_default(),
        };
        let item = vigil.add_routine(draft).await?;
        print_items(vigil, &[item], self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdRoutineList {
    pub output_format: ArgOutputFormat,
}

impl CmdRoutineList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List your daily routine")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, vigil: &Vigil) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing routine...");
        Self::list(vigil, self.output_format).await
    }

    pub async fn list(vigil: &Vigil, output_format: ArgOutputFormat) -> Result<(), Box<dyn Error>> {
        let items = vigil.list_routine().await?;
        if items.is_empty() && output_format == ArgOutputFormat::Table {
            println!("{}", "No routine items yet".italic());
            return Ok(());
        }

        print_items(vigil, &items, output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdRoutineDone {
    pub ids: Vec<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdRoutineDone {
    pub const NAME: &str = "done";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check routine items off for today")
            .arg(arg_ids())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: get_ids(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, vigil: &Vigil) -> Result<(), Box<dyn Error>> {
        let mut items = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            tracing::debug!(id, "checking routine item off");
            items.push(vigil.complete_routine(id).await?);
        }
        print_items(vigil, &items, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdRoutineUndo {
    pub ids: Vec<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdRoutineUndo {
    pub const NAME: &str = "undo";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Clear the check mark of routine items")
            .arg(arg_ids())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: get_ids(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, vigil: &Vigil) -> Result<(), Box<dyn Error>> {
        let mut items = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            tracing::debug!(id, "reopening routine item");
            items.push(vigil.reopen_routine(id).await?);
        }
        print_items(vigil, &items, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdRoutineRemove {
    pub ids: Vec<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdRoutineRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Remove items from your daily routine")
            .arg(arg_ids())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: get_ids(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, vigil: &Vigil) -> Result<(), Box<dyn Error>> {
        let mut items = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            tracing::debug!(id, "removing routine item");
            items.push(vigil.remove_routine(id).await?);
        }

        if self.output_format == ArgOutputFormat::Table {
            for item in &items {
                println!("{} {}", "Removed".yellow(), item.title);
            }
        } else {
            print_items(vigil, &items, self.output_format);
        }
        Ok(())
    }
}

fn arg_ids() -> Arg {
    arg!(id: <ID> "The id or a unique id prefix of the routine item").num_args(1..)
}

fn get_ids(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("id")
        .map(|ids| ids.cloned().collect())
        .unwrap_or_default()
}

fn print_items(vigil: &Vigil, items: &[RoutineItem], output_format: ArgOutputFormat) {
    let formatter = RoutineFormatter::new(vigil.today()).with_output_format(output_format);
    println!("{}", formatter.format(items));
}
