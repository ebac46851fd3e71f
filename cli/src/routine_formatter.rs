// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use colored::Color;
use jiff::civil::Date;
use vigil_core::RoutineItem;

use crate::table::{FormattedTable, PaddingDirection, TableColumn};
use crate::util::ArgOutputFormat;

/// Length of ids shown in tables, long enough to stay unique in a routine.
const SHORT_ID_LEN: usize = 8;

#[derive(Debug)]
pub struct RoutineFormatter {
    columns: Vec<RoutineColumn>,
    format: ArgOutputFormat,
}

impl RoutineFormatter {
    pub fn new(today: Date) -> Self {
        Self {
            columns: vec![
                RoutineColumn::Status(RoutineColumnStatus { today }),
                RoutineColumn::Id(RoutineColumnId { short: true }),
                RoutineColumn::Slot(RoutineColumnSlot),
                RoutineColumn::Title(RoutineColumnTitle),
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        if format == ArgOutputFormat::Json {
            for col in &mut self.columns {
                if let RoutineColumn::Id(id) = col {
                    id.short = false;
                }
            }
            self.columns.push(RoutineColumn::Note(RoutineColumnNote));
        }
        self.format = format;
        self
    }

    pub fn format<'a>(
        &'a self,
        items: &'a [RoutineItem],
    ) -> FormattedTable<'a, RoutineColumn, RoutineItem> {
        FormattedTable::new(self.format, &self.columns, items)
    }
}

#[derive(Debug, Clone)]
pub enum RoutineColumn {
    Id(RoutineColumnId),
    Note(RoutineColumnNote),
    Slot(RoutineColumnSlot),
    Status(RoutineColumnStatus),
    Title(RoutineColumnTitle),
}

impl TableColumn<RoutineItem> for RoutineColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            RoutineColumn::Id(_) => "ID",
            RoutineColumn::Note(_) => "Note",
            RoutineColumn::Slot(_) => "Slot",
            RoutineColumn::Status(_) => "Done",
            RoutineColumn::Title(_) => "Title",
        }
        .into()
    }

    fn format<'a>(&self, item: &'a RoutineItem) -> Cow<'a, str> {
        match self {
            RoutineColumn::Id(a) => a.format(item),
            RoutineColumn::Note(a) => a.format(item),
            RoutineColumn::Slot(a) => a.format(item),
            RoutineColumn::Status(a) => a.format(item),
            RoutineColumn::Title(a) => a.format(item),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            RoutineColumn::Id(_) => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, item: &RoutineItem) -> Option<Color> {
        match self {
            RoutineColumn::Status(a) => a.get_color(item),
            RoutineColumn::Slot(_) => Some(Color::Cyan),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoutineColumnId {
    short: bool,
}

impl RoutineColumnId {
    fn format<'a>(&self, item: &'a RoutineItem) -> Cow<'a, str> {
        match item.id.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) if self.short => item.id[..idx].into(),
            _ => item.id.as_str().into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoutineColumnNote;

impl RoutineColumnNote {
    fn format<'a>(&self, item: &'a RoutineItem) -> Cow<'a, str> {
        item.note.as_deref().unwrap_or_default().into()
    }
}

#[derive(Debug, Clone)]
pub struct RoutineColumnSlot;

impl RoutineColumnSlot {
    fn format<'a>(&self, item: &'a RoutineItem) -> Cow<'a, str> {
        item.slot.as_str().into()
    }
}

#[derive(Debug, Clone)]
pub struct RoutineColumnStatus {
    today: Date,
}

impl RoutineColumnStatus {
    fn format<'a>(&self, item: &'a RoutineItem) -> Cow<'a, str> {
        match item.is_done_on(self.today) {
            true => "[x]",
            false => "[ ]",
        }
        .into()
    }

    fn get_color(&self, item: &RoutineItem) -> Option<Color> {
        item.is_done_on(self.today).then_some(Color::Green)
    }
}

#[derive(Debug, Clone)]
pub struct RoutineColumnTitle;

impl RoutineColumnTitle {
    fn format<'a>(&self, item: &'a RoutineItem) -> Cow<'a, str> {
        item.title.as_str().into()
    }
}
