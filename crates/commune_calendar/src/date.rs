// --- File: crates/commune_calendar/src/date.rs ---
//! Date model: calendar days, week anchors, month starts and the labels
//! rendered for them.
//!
//! Everything here is pure. A `CalendarDate` carries no time of day, so two
//! dates compare equal exactly when they name the same local calendar day.

use chrono::{
    DateTime, Datelike, Duration, Local, Months, NaiveDate, TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;
use commune_common::CommuneError;
use commune_config::CalendarConfig;
use std::fmt;
use thiserror::Error;

/// Earliest year a `CalendarDate` can be constructed or navigated to.
pub const MIN_YEAR: i32 = 1;
/// Latest year a `CalendarDate` can be constructed or navigated to.
pub const MAX_YEAR: i32 = 9999;

const ISO_FORMAT: &str = "%Y-%m-%d";

// --- Error Handling ---
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date key '{0}', expected YYYY-MM-DD")]
    InvalidDateKey(String),
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Date outside supported range: {0}")]
    OutOfRange(String),
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
}

impl From<CalendarError> for CommuneError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::UnknownTimeZone(name) => {
                CommuneError::ConfigError(format!("Unknown calendar time zone: {}", name))
            }
            other => CommuneError::ValidationError(other.to_string()),
        }
    }
}

// --- Data Structures ---

/// A day on the calendar, normalized to local midnight.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Wraps a naive date, rejecting years outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(date: NaiveDate) -> Result<Self, CalendarError> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(CalendarError::OutOfRange(date.format(ISO_FORMAT).to_string()))
        }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::InvalidDate { year, month, day })?;
        Self::new(date)
    }

    /// The calendar day an instant falls on in the instant's own zone.
    /// The time of day is discarded.
    pub fn from_datetime<Z: TimeZone>(instant: &DateTime<Z>) -> Result<Self, CalendarError> {
        Self::new(instant.date_naive())
    }

    /// Parses a `YYYY-MM-DD` workout key.
    pub fn parse_iso(key: &str) -> Result<Self, CalendarError> {
        let date = NaiveDate::parse_from_str(key.trim(), ISO_FORMAT)
            .map_err(|_| CalendarError::InvalidDateKey(key.to_string()))?;
        Self::new(date)
    }

    /// The `YYYY-MM-DD` key used to look up this day's workout.
    pub fn iso_key(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// 0 for Sunday through 6 for Saturday.
    pub fn days_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Moves by whole days using calendar arithmetic.
    pub fn shift_days(self, days: i64) -> Result<Self, CalendarError> {
        let shifted = self
            .0
            .checked_add_signed(Duration::days(days))
            .ok_or_else(|| CalendarError::OutOfRange(format!("{} {:+} days", self, days)))?;
        Self::new(shifted)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iso_key())
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDate({})", self.iso_key())
    }
}

/// The Sunday that starts a displayed week. Only `week_anchor_of` builds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekAnchor(CalendarDate);

impl WeekAnchor {
    pub fn date(&self) -> CalendarDate {
        self.0
    }

    /// The day `offset` days after the anchor; `offset` is a weekday index 0..7.
    pub fn day(&self, offset: u32) -> CalendarDate {
        debug_assert!(offset < 7, "weekday offset out of range: {}", offset);
        CalendarDate(self.0 .0 + Duration::days(i64::from(offset)))
    }

    /// Moves by whole weeks; the result is a Sunday again.
    pub fn shift_weeks(self, weeks: i64) -> Result<Self, CalendarError> {
        self.0 .0
            .checked_add_signed(Duration::weeks(weeks))
            .map(|date| Self(CalendarDate(date)))
            .ok_or_else(|| {
                CalendarError::OutOfRange(format!("week of {} {:+} weeks", self.0, weeks))
            })
    }
}

/// The first day of a month, used as the month shown in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthStart(CalendarDate);

impl MonthStart {
    pub fn date(&self) -> CalendarDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        // Day 0 of the following month is the last day of this one.
        self.0 .0
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31)
    }

    /// Blank cells before the 1st in a Sunday-first grid.
    pub fn leading_blanks(&self) -> u32 {
        self.0.days_from_sunday()
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Moves by whole months with year rollover.
    pub fn shift_months(self, months: i32) -> Result<Self, CalendarError> {
        let magnitude = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.0 .0.checked_add_months(magnitude)
        } else {
            self.0 .0.checked_sub_months(magnitude)
        }
        .ok_or_else(|| CalendarError::OutOfRange(format!("{} {:+} months", self.0, months)))?;
        CalendarDate::new(shifted).map(Self)
    }
}

/// Which clock decides where "today" starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarZone {
    /// The host's local time zone.
    #[default]
    Local,
    Named(Tz),
}

impl CalendarZone {
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        match config.timezone.as_deref() {
            None => Ok(CalendarZone::Local),
            Some(name) => name
                .parse::<Tz>()
                .map(CalendarZone::Named)
                .map_err(|_| CalendarError::UnknownTimeZone(name.to_string())),
        }
    }

    /// The calendar day an instant falls on in this zone.
    pub fn date_of(&self, instant: DateTime<Utc>) -> CalendarDate {
        match self {
            CalendarZone::Local => CalendarDate(instant.with_timezone(&Local).date_naive()),
            CalendarZone::Named(tz) => CalendarDate(instant.with_timezone(tz).date_naive()),
        }
    }

    pub fn today(&self) -> CalendarDate {
        self.date_of(Utc::now())
    }
}

/// The subtitle shown above the workout for a selected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    Today,
    Tomorrow,
    Other(CalendarDate),
}

impl DayLabel {
    /// Heading used on the training screen, e.g. "Today's Workout".
    pub fn workout_heading(&self) -> String {
        match self {
            DayLabel::Today => "Today's Workout".to_string(),
            DayLabel::Tomorrow => "Tomorrow's Workout".to_string(),
            DayLabel::Other(date) => long_date_label(*date),
        }
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLabel::Today => write!(f, "Today"),
            DayLabel::Tomorrow => write!(f, "Tomorrow"),
            DayLabel::Other(date) => write!(f, "{}", long_date_label(*date)),
        }
    }
}

// --- Date Logic ---

/// The Sunday at or before `date`.
pub fn week_anchor_of(date: CalendarDate) -> WeekAnchor {
    let back = i64::from(date.days_from_sunday());
    WeekAnchor(CalendarDate(date.0 - Duration::days(back)))
}

/// The seven days of the week starting at `anchor`, Sunday first.
pub fn week_days(anchor: WeekAnchor) -> [CalendarDate; 7] {
    std::array::from_fn(|offset| anchor.day(offset as u32))
}

pub fn first_of_month(date: CalendarDate) -> MonthStart {
    MonthStart(CalendarDate(date.0 - Duration::days(i64::from(date.day()) - 1)))
}

/// The month as a Sunday-first grid: `None` for each blank before the 1st,
/// then every day in order. There are no trailing blanks.
pub fn month_grid(month: MonthStart) -> Vec<Option<CalendarDate>> {
    let blanks = month.leading_blanks() as usize;
    let days = month.days_in_month();

    let mut grid = Vec::with_capacity(blanks + days as usize);
    grid.extend(std::iter::repeat(None).take(blanks));
    grid.extend((0..days).map(|offset| {
        Some(CalendarDate(month.date().0 + Duration::days(i64::from(offset))))
    }));
    grid
}

pub fn subtitle_for(date: CalendarDate, today: CalendarDate) -> DayLabel {
    if date == today {
        DayLabel::Today
    } else if today.0.succ_opt() == Some(date.0) {
        DayLabel::Tomorrow
    } else {
        DayLabel::Other(date)
    }
}

/// "Wed"
pub fn short_day_name(date: CalendarDate) -> String {
    date.0.format("%a").to_string()
}

/// "APRIL 2024"
pub fn month_year_label(date: CalendarDate) -> String {
    date.0.format("%B %Y").to_string().to_uppercase()
}

/// "Wednesday, April 3"
pub fn long_date_label(date: CalendarDate) -> String {
    date.0.format("%A, %B %-d").to_string()
}
