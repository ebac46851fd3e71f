// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use async_trait::async_trait;
use jiff::Timestamp;
use jiff::civil::Date;

use crate::BackendError;

/// Time of day a routine item belongs to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RoutineSlot {
    /// On waking.
    #[default]
    Morning,

    /// Around noon.
    Midday,

    /// After work.
    Evening,

    /// Before sleep.
    Night,
}

impl RoutineSlot {
    /// Stable lowercase name, used in storage.
    pub const fn as_str(self) -> &'static str {
        match self {
            RoutineSlot::Morning => "morning",
            RoutineSlot::Midday => "midday",
            RoutineSlot::Evening => "evening",
            RoutineSlot::Night => "night",
        }
    }
}

impl fmt::Display for RoutineSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoutineSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(RoutineSlot::Morning),
            "midday" => Ok(RoutineSlot::Midday),
            "evening" => Ok(RoutineSlot::Evening),
            "night" => Ok(RoutineSlot::Night),
            _ => Err(format!("Invalid routine slot: {s}")),
        }
    }
}

/// A devotional task in a user's daily routine.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoutineItem {
    /// Unique identifier.
    pub id: String,

    /// Owner of the item.
    pub user_id: String,

    /// Short title, e.g. "Morning offering".
    pub title: String,

    /// Optional free-form note.
    #[serde(default)]
    pub note: Option<String>,

    /// Time of day.
    #[serde(default)]
    pub slot: RoutineSlot,

    /// The last day the item was checked off.
    #[serde(default)]
    pub completed_on: Option<Date>,

    /// Creation time.
    pub created_at: Timestamp,
}

impl RoutineItem {
    /// Whether the item has been checked off on `today`.
    pub fn is_done_on(&self, today: Date) -> bool {
        self.completed_on == Some(today)
    }
}

/// Data for a new routine item.
#[derive(Debug, Clone, Default)]
pub struct RoutineDraft {
    /// Short title.
    pub title: String,

    /// Optional note.
    pub note: Option<String>,

    /// Time of day.
    pub slot: RoutineSlot,
}

impl RoutineDraft {
    pub(crate) fn into_item(self, user_id: &str, now: Timestamp) -> RoutineItem {
        RoutineItem {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: self.title,
            note: self.note.filter(|a| !a.is_empty()),
            slot: self.slot,
            completed_on: None,
            created_at: now,
        }
    }
}

/// Persistence of routine items, scoped by user.
///
/// Implementations are selected once at startup, see [`crate::Vigil::new`].
#[async_trait]
pub trait RoutineStore: fmt::Debug + Send + Sync {
    /// All items of a user ordered by slot, then creation time.
    async fn list(&self, user_id: &str) -> Result<Vec<RoutineItem>, BackendError>;

    /// The item with exactly this id.
    async fn get(&self, user_id: &str, id: &str) -> Result<Option<RoutineItem>, BackendError>;

    /// Inserts the item or replaces the one with the same id.
    async fn upsert(&self, item: &RoutineItem) -> Result<(), BackendError>;

    /// Deletes an item, returning whether it existed.
    async fn delete(&self, user_id: &str, id: &str) -> Result<bool, BackendError>;
}

pub(crate) fn sort_items(items: &mut [RoutineItem]) {
    items.sort_by(|a, b| (a.slot, a.created_at).cmp(&(b.slot, b.created_at)));
}

/// Finds the single item whose id starts with `prefix`.
pub(crate) fn find_by_prefix<'a>(
    items: &'a [RoutineItem],
    prefix: &str,
) -> Result<&'a RoutineItem, BackendError> {
    if let Some(exact) = items.iter().find(|a| a.id == prefix) {
        return Ok(exact);
    }

    let mut matches = items.iter().filter(|a| a.id.starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(item), None) if !prefix.is_empty() => Ok(item),
        (Some(_), _) => Err(BackendError::Ambiguous(prefix.to_string())),
        (None, _) => Err(BackendError::NotFound(prefix.to_string())),
    }
}
