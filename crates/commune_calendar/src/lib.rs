// --- File: crates/commune_calendar/src/lib.rs ---
// Declare modules within this crate
pub mod controller;
pub mod date;
#[cfg(test)]
mod date_proptest;
pub mod gesture;
pub mod navigation;
#[cfg(test)]
mod navigation_test;
pub mod picker;
pub mod selection;

pub use controller::{CalendarController, CalendarEvent, CalendarUpdate};
pub use date::{
    first_of_month, long_date_label, month_grid, month_year_label, short_day_name, subtitle_for,
    week_anchor_of, week_days, CalendarDate, CalendarError, CalendarZone, DayLabel, MonthStart,
    WeekAnchor,
};
pub use gesture::SwipeClassifier;
pub use navigation::{NavigationOutcome, NavigationPhase, WeekNavigator};
pub use picker::{PickerCell, PickerView, StripCell, WEEKDAY_HEADER};
pub use selection::{Direction, SelectionState};
