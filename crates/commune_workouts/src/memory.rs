// --- File: crates/commune_workouts/src/memory.rs ---
//! Workout table held in memory, keyed by calendar day.

use std::collections::HashMap;
use std::sync::Mutex;

use commune_calendar::CalendarDate;
use commune_common::models::WorkoutRecord;
use commune_common::services::{BoxFuture, WorkoutSource};
use tracing::debug;

use crate::demo::demo_workouts;
use crate::error::WorkoutError;

#[derive(Debug, Default)]
pub struct InMemoryWorkoutSource {
    workouts: Mutex<HashMap<CalendarDate, WorkoutRecord>>,
}

impl InMemoryWorkoutSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the sample workouts for `today` and the two days after.
    pub fn with_demo_seed(today: CalendarDate) -> Self {
        let source = Self::new();
        if let Ok(mut workouts) = source.workouts.lock() {
            workouts.extend(demo_workouts(today));
        }
        source
    }

    /// Schedules `record` on `date`, replacing whatever was there.
    pub fn insert(&self, date: CalendarDate, record: WorkoutRecord) -> Result<(), WorkoutError> {
        let mut workouts = self.workouts.lock().map_err(|_| WorkoutError::StorePoisoned)?;
        workouts.insert(date, record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.workouts.lock().map(|w| w.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WorkoutSource for InMemoryWorkoutSource {
    type Error = WorkoutError;

    fn lookup(&self, date_key: &str) -> BoxFuture<'_, Option<WorkoutRecord>, Self::Error> {
        let parsed = CalendarDate::parse_iso(date_key);

        Box::pin(async move {
            let date = parsed?;
            let workouts = self.workouts.lock().map_err(|_| WorkoutError::StorePoisoned)?;
            let record = workouts.get(&date).cloned();
            debug!("in-memory workout lookup for {}: found={}", date, record.is_some());
            Ok(record)
        })
    }
}
