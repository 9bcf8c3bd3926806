//! Test fixtures for calendar flow tests
//!
//! Factory functions for dates, configuration and a ready-made controller.

use commune_calendar::{CalendarController, CalendarDate};
use commune_config::{CalendarConfig, SwipeConfig};

/// Builds a date, panicking on invalid input
pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("valid fixture date")
}

/// Calendar configuration with the stock thresholds and a custom cooldown
#[allow(dead_code)]
pub fn create_calendar_config(cooldown_ms: u64) -> CalendarConfig {
    CalendarConfig {
        timezone: Some("Europe/Zurich".to_string()),
        cooldown_ms,
        swipe: SwipeConfig::default(),
    }
}

/// Controller opened on Wednesday, April 3rd 2024
pub fn create_controller() -> CalendarController {
    CalendarController::new(date(2024, 4, 3), &CalendarConfig::default())
}
