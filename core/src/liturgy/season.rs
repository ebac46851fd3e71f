// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

/// The liturgical seasons. Exactly one is active on any given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Season {
    /// The four weeks of preparation before Christmas.
    #[serde(rename = "advent")]
    Advent,

    /// From Christmas until the Baptism of the Lord.
    #[serde(rename = "christmas")]
    ChristmasTime,

    /// From Ash Wednesday until Easter.
    #[serde(rename = "lent")]
    Lent,

    /// From Easter Sunday until Pentecost.
    #[serde(rename = "easter")]
    EasterTime,

    /// Everything else.
    #[serde(rename = "ordinary")]
    OrdinaryTime,
}

impl Season {
    /// All seasons in the order they appear in a liturgical year.
    pub const ALL: [Season; 5] = [
        Season::Advent,
        Season::ChristmasTime,
        Season::OrdinaryTime,
        Season::Lent,
        Season::EasterTime,
    ];

    /// Stable identifier, used in JSON output and persisted themes.
    pub const fn id(self) -> &'static str {
        match self {
            Season::Advent => "advent",
            Season::ChristmasTime => "christmas",
            Season::Lent => "lent",
            Season::EasterTime => "easter",
            Season::OrdinaryTime => "ordinary",
        }
    }

    /// Localized display name.
    pub const fn name(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Season::Advent) => "Advent",
            (Locale::En, Season::ChristmasTime) => "Christmas Time",
            (Locale::En, Season::Lent) => "Lent",
            (Locale::En, Season::EasterTime) => "Easter Time",
            (Locale::En, Season::OrdinaryTime) => "Ordinary Time",
            (Locale::PtBr, Season::Advent) => "Advento",
            (Locale::PtBr, Season::ChristmasTime) => "Tempo do Natal",
            (Locale::PtBr, Season::Lent) => "Quaresma",
            (Locale::PtBr, Season::EasterTime) => "Tempo Pascal",
            (Locale::PtBr, Season::OrdinaryTime) => "Tempo Comum",
        }
    }

    /// The liturgical color associated with the season.
    pub const fn color(self) -> LiturgicalColor {
        match self {
            Season::Advent | Season::Lent => LiturgicalColor::Violet,
            Season::ChristmasTime | Season::EasterTime => LiturgicalColor::White,
            Season::OrdinaryTime => LiturgicalColor::Green,
        }
    }

    /// Canonical length of the season in days.
    ///
    /// NOTE: Ordinary Time is given as a flat 34 weeks although its real length
    /// varies with the date of Easter. It only serves as a progress denominator.
    pub const fn nominal_total_days(self) -> i32 {
        match self {
            Season::Advent => 24,
            Season::ChristmasTime => 20,
            Season::Lent => 40,
            Season::EasterTime => 50,
            Season::OrdinaryTime => 34 * 7,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Liturgical colors, independent of how they are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiturgicalColor {
    /// Penance and preparation.
    Violet,

    /// Joy, used for the Christmas and Easter seasons.
    White,

    /// Hope, used throughout Ordinary Time.
    Green,
}

impl LiturgicalColor {
    /// Semantic name of the color.
    pub const fn name(self) -> &'static str {
        match self {
            LiturgicalColor::Violet => "violet",
            LiturgicalColor::White => "white",
            LiturgicalColor::Green => "green",
        }
    }

    /// Presentation encoding as a hex RGB string.
    pub const fn hex(self) -> &'static str {
        match self {
            LiturgicalColor::Violet => "#6B21A8",
            LiturgicalColor::White => "#F5F5F4",
            LiturgicalColor::Green => "#15803D",
        }
    }
}

impl fmt::Display for LiturgicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Locales available for display names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Locale {
    /// English.
    #[default]
    #[serde(rename = "en")]
    #[cfg_attr(feature = "clap", clap(name = "en"))]
    En,

    /// Brazilian Portuguese.
    #[serde(rename = "pt-BR", alias = "pt-br", alias = "pt")]
    #[cfg_attr(feature = "clap", clap(name = "pt-BR", alias = "pt"))]
    PtBr,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "pt" | "pt-br" => Ok(Locale::PtBr),
            _ => Err(format!("Unsupported locale: {s}")),
        }
    }
}
