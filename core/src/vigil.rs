// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::Arc;

use jiff::Zoned;
use jiff::civil::Date;
use tokio::fs;

use crate::localdb::LocalDb;
use crate::readings::{DailyReadings, ReadingsFeed};
use crate::remote::RemoteRoutines;
use crate::routine::find_by_prefix;
use crate::{
    BackendError, CalendarError, Clock, Config, DailyCache, LiturgicalCalendar, RoutineDraft,
    RoutineItem, RoutineStore, SeasonBoundaries, SeasonInfo, SystemClock, WeekInfo,
};

const READINGS_CACHE_KEY: &str = "readings";

/// Vigil application core.
#[derive(Debug, Clone)]
pub struct Vigil {
    config: Config,
    clock: Arc<dyn Clock>,
    calendar: LiturgicalCalendar,
    db: LocalDb,
    routines: Arc<dyn RoutineStore>,
    cache: Arc<dyn DailyCache>,
    readings: ReadingsFeed,
}

impl Vigil {
    /// Creates a new Vigil instance reading the system clock.
    pub async fn new(config: Config) -> Result<Self, Box<dyn Error>> {
        Self::with_clock(config, Arc::new(SystemClock)).await
    }

    /// Creates a new Vigil instance with the given clock.
    ///
    /// The routine store is chosen here, once: the hosted backend when
    /// `remote` is configured, the local database otherwise.
    pub async fn with_clock(
        mut config: Config,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        prepare(&config).await?;

        let db_path = config.state_dir.as_ref().map(|a| a.join("vigil.db"));
        let db = LocalDb::open(db_path.as_deref())
            .await
            .map_err(|e| format!("Failed to initialize db: {e}"))?;

        let routines: Arc<dyn RoutineStore> = match &config.remote {
            Some(remote) => {
                tracing::info!(url = remote.url, "using remote routine store");
                Arc::new(RemoteRoutines::new(remote.clone())?)
            }
            None => {
                tracing::info!("using local routine store");
                Arc::new(db.routines.clone())
            }
        };

        let cache = Arc::new(db.daily_cache.clone());
        let readings = ReadingsFeed::new(config.readings.as_ref())?;
        let calendar = LiturgicalCalendar::new(config.locale);
        Ok(Self {
            config,
            clock,
            calendar,
            db,
            routines,
            cache,
            readings,
        })
    }

    /// Replaces the daily cache.
    pub fn with_cache(mut self, cache: Arc<dyn DailyCache>) -> Self {
        self.cache = cache;
        self
    }

    /// The normalized configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current time.
    pub fn now(&self) -> Zoned {
        self.clock.now()
    }

    /// The current civil date.
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    /// The liturgical calendar in the configured locale.
    pub fn calendar(&self) -> LiturgicalCalendar {
        self.calendar
    }

    /// The season active on `date`, or today.
    pub fn season_info(&self, date: Option<Date>) -> Result<SeasonInfo, CalendarError> {
        self.calendar.season_info(date.unwrap_or_else(|| self.today()))
    }

    /// Season badge information for `date`, or today.
    pub fn week_info(&self, date: Option<Date>) -> Result<WeekInfo, CalendarError> {
        self.calendar.week_info(date.unwrap_or_else(|| self.today()))
    }

    /// The 1-indexed day of a season that began on `start`, as of today.
    pub fn day_of_season(&self, start: Date) -> i32 {
        crate::day_of_season(start, self.today())
    }

    /// Season boundaries of a civil year.
    pub fn boundaries(&self, year: i16) -> Result<SeasonBoundaries, CalendarError> {
        self.calendar.boundaries(year)
    }

    /// The routine of the configured user.
    pub async fn list_routine(&self) -> Result<Vec<RoutineItem>, BackendError> {
        self.routines.list(&self.config.user_id).await
    }

    /// Adds a routine item from the given draft.
    pub async fn add_routine(&self, draft: RoutineDraft) -> Result<RoutineItem, Box<dyn Error>> {
        if draft.title.trim().is_empty() {
            return Err("Routine title must not be empty".into());
        }

        let item = draft.into_item(&self.config.user_id, self.now().timestamp());
        self.routines.upsert(&item).await?;
        Ok(item)
    }

    /// Finds a routine item by id or unique id prefix.
    pub async fn get_routine(&self, id: &str) -> Result<RoutineItem, BackendError> {
        // only a full uuid can be looked up directly, a prefix is matched against the list
        if uuid::Uuid::parse_str(id).is_ok() {
            if let Some(item) = self.routines.get(&self.config.user_id, id).await? {
                return Ok(item);
            }
        }

        let items = self.list_routine().await?;
        find_by_prefix(&items, id).cloned()
    }

    /// Checks a routine item off for today.
    pub async fn complete_routine(&self, id: &str) -> Result<RoutineItem, BackendError> {
        let mut item = self.get_routine(id).await?;
        item.completed_on = Some(self.today());
        self.routines.upsert(&item).await?;
        Ok(item)
    }

    /// Clears the check mark of a routine item.
    pub async fn reopen_routine(&self, id: &str) -> Result<RoutineItem, BackendError> {
        let mut item = self.get_routine(id).await?;
        item.completed_on = None;
        self.routines.upsert(&item).await?;
        Ok(item)
    }

    /// Removes a routine item, returning it.
    pub async fn remove_routine(&self, id: &str) -> Result<RoutineItem, BackendError> {
        let item = self.get_routine(id).await?;
        match self.routines.delete(&self.config.user_id, &item.id).await? {
            true => Ok(item),
            false => Err(BackendError::NotFound(id.to_string())),
        }
    }

    /// Today's readings, fetched at most once per day.
    ///
    /// Never fails: any error is logged and placeholder readings are returned.
    pub async fn readings(&self) -> DailyReadings {
        let today = self.today();
        match self.cache.get(READINGS_CACHE_KEY, today).await {
            Ok(Some(cached)) => match serde_json::from_str(&cached) {
                Ok(readings) => return readings,
                Err(e) => tracing::warn!(err = %e, "discarding undecodable cached readings"),
            },
            Ok(None) => {}
            Err(e) => tracing::warn!(err = %e, "failed to read readings cache"),
        }

        let readings = match self.readings.fetch(today).await {
            Ok(readings) => readings,
            Err(e) => {
                tracing::warn!(err = %e, "failed to fetch daily readings, using placeholder");
                return DailyReadings::placeholder(today);
            }
        };

        match serde_json::to_string(&readings) {
            Ok(json) => {
                if let Err(e) = self.cache.put(READINGS_CACHE_KEY, today, &json).await {
                    tracing::warn!(err = %e, "failed to cache daily readings");
                }
            }
            Err(e) => tracing::warn!(err = %e, "failed to encode daily readings"),
        }
        readings
    }

    /// Close the Vigil instance, saving any changes to the database.
    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        self.db.close().await?;
        Ok(())
    }
}

async fn prepare(config: &Config) -> Result<(), Box<dyn Error>> {
    if let Some(state_dir) = &config.state_dir {
        tracing::info!(path = %state_dir.display(), "ensuring state directory exists");
        fs::create_dir_all(state_dir).await?;
    }
    Ok(())
}
