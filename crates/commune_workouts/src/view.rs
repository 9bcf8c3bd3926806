// --- File: crates/commune_workouts/src/view.rs ---
//! What the workout panel below the week strip shows for the selected day.

use commune_calendar::{subtitle_for, CalendarDate};
use commune_common::models::WorkoutRecord;
use commune_common::services::WorkoutSource;
use tracing::{debug, warn};

pub const EMPTY_TITLE: &str = "No workout scheduled";
pub const EMPTY_HINT: &str = "Check back later";
pub const UNAVAILABLE_TITLE: &str = "Workout unavailable";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkoutView {
    /// A workout is scheduled; `heading` is e.g. "Today's Workout".
    Scheduled {
        heading: String,
        record: WorkoutRecord,
    },
    /// Nothing scheduled for the day.
    Empty { heading: String },
    /// The lookup failed. `message` is the error text, already logged.
    Unavailable { heading: String, message: String },
}

impl WorkoutView {
    pub fn heading(&self) -> &str {
        match self {
            WorkoutView::Scheduled { heading, .. }
            | WorkoutView::Empty { heading }
            | WorkoutView::Unavailable { heading, .. } => heading,
        }
    }

    pub fn record(&self) -> Option<&WorkoutRecord> {
        match self {
            WorkoutView::Scheduled { record, .. } => Some(record),
            _ => None,
        }
    }
}

/// Looks up the workout for `selected` and turns the result into a view.
///
/// Absence renders the empty state. A failed lookup is logged and rendered
/// as unavailable; it is not retried.
pub async fn load_workout_view<S>(source: &S, selected: CalendarDate, today: CalendarDate) -> WorkoutView
where
    S: WorkoutSource + ?Sized,
{
    let heading = subtitle_for(selected, today).workout_heading();
    let key = selected.iso_key();

    match source.lookup(&key).await {
        Ok(Some(record)) => {
            debug!("workout for {}: {}", key, record.title);
            WorkoutView::Scheduled { heading, record }
        }
        Ok(None) => WorkoutView::Empty { heading },
        Err(err) => {
            warn!("workout lookup for {} failed: {}", key, err);
            WorkoutView::Unavailable {
                heading,
                message: err.to_string(),
            }
        }
    }
}
