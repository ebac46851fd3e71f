// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use colored::{Color, Colorize};
use jiff::civil::Date;
use vigil_core::{SeasonBoundaries, SeasonInfo, WeekInfo, week_of_season};

use crate::table::{FormattedTable, PaddingDirection, TableColumn};
use crate::util::{ArgOutputFormat, terminal_color};

/// The season active on a given date.
#[derive(Debug, Clone)]
pub struct SeasonRow {
    pub date: Date,
    pub info: SeasonInfo,
}

impl SeasonRow {
    pub fn day(&self) -> i32 {
        self.info.day_of_season(self.date)
    }
}

/// One-line season badge, e.g. "Lent · Week 2 · Day 12 of 40".
pub fn season_badge(row: &SeasonRow) -> String {
    let day = row.day();
    format!(
        "{} {} Week {} {} Day {day} of {}",
        row.info.name.color(terminal_color(row.info.color)).bold(),
        "·".dimmed(),
        week_of_season(day),
        "·".dimmed(),
        row.info.nominal_total_days
    )
}

#[derive(Debug, Clone)]
pub enum SeasonColumn {
    Date,
    Name,
    Color,
    Start,
    Day,
    TotalDays,
    Week,
}

impl SeasonColumn {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Date,
            Self::Name,
            Self::Color,
            Self::Start,
            Self::Day,
            Self::TotalDays,
            Self::Week,
        ]
    }

    pub fn format(format: ArgOutputFormat, rows: &[SeasonRow]) -> String {
        let columns = Self::all();
        FormattedTable::new(format, &columns, rows).to_string()
    }
}

impl TableColumn<SeasonRow> for SeasonColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Date => "Date",
            Self::Name => "Season",
            Self::Color => "Color",
            Self::Start => "Start",
            Self::Day => "Day",
            Self::TotalDays => "Total Days",
            Self::Week => "Week",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a SeasonRow) -> Cow<'a, str> {
        match self {
            Self::Date => row.date.to_string().into(),
            Self::Name => row.info.name.into(),
            Self::Color => row.info.color.name().into(),
            Self::Start => row.info.start.to_string().into(),
            Self::Day => row.day().to_string().into(),
            Self::TotalDays => row.info.nominal_total_days.to_string().into(),
            Self::Week => week_of_season(row.day()).to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Day | Self::TotalDays | Self::Week => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, row: &SeasonRow) -> Option<Color> {
        match self {
            Self::Name => Some(terminal_color(row.info.color)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum WeekColumn {
    Season,
    Week,
    Color,
    Feast,
}

impl WeekColumn {
    pub fn format(format: ArgOutputFormat, rows: &[WeekInfo]) -> String {
        let columns = vec![Self::Season, Self::Week, Self::Color, Self::Feast];
        FormattedTable::new(format, &columns, rows).to_string()
    }
}

impl TableColumn<WeekInfo> for WeekColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Season => "Season",
            Self::Week => "Week",
            Self::Color => "Color",
            Self::Feast => "Feast",
        }
        .into()
    }

    fn format<'a>(&self, info: &'a WeekInfo) -> Cow<'a, str> {
        match self {
            Self::Season => info.season_name.into(),
            Self::Week => info.week.to_string().into(),
            Self::Color => info.color.name().into(),
            Self::Feast => (if info.is_feast { "yes" } else { "no" }).into(),
        }
    }

    fn get_color(&self, info: &WeekInfo) -> Option<Color> {
        match self {
            Self::Season => Some(terminal_color(info.color)),
            _ => None,
        }
    }
}

/// A dated landmark of the liturgical year.
#[derive(Debug, Clone)]
pub struct YearRow {
    pub label: &'static str,
    pub date: Date,
}

impl YearRow {
    /// Landmarks of a civil year in calendar order.
    pub fn from_boundaries(b: &SeasonBoundaries) -> Vec<Self> {
        let row = |label, date| YearRow { label, date };
        vec![
            row("Baptism of the Lord", b.christmastide_close),
            row("Ordinary Time begins", b.ordinary_time_start),
            row("Ash Wednesday", b.ash_wednesday),
            row("Easter Sunday", b.easter),
            row("Pentecost", b.pentecost),
            row("Ordinary Time resumes", b.ordinary_time_resume),
            row("First Sunday of Advent", b.advent_start),
            row("Christmas", b.christmas),
        ]
    }
}

#[derive(Debug, Clone)]
pub enum YearColumn {
    Label,
    Date,
    Weekday,
}

impl YearColumn {
    pub fn format(format: ArgOutputFormat, rows: &[YearRow]) -> String {
        let columns = vec![Self::Label, Self::Date, Self::Weekday];
        FormattedTable::new(format, &columns, rows).to_string()
    }
}

impl TableColumn<YearRow> for YearColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Label => "Observance",
            Self::Date => "Date",
            Self::Weekday => "Weekday",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a YearRow) -> Cow<'a, str> {
        match self {
            Self::Label => row.label.into(),
            Self::Date => row.date.to_string().into(),
            Self::Weekday => format!("{:?}", row.date.weekday()).into(),
        }
    }
}
