// --- File: crates/commune_calendar/src/selection.rs ---
//! Selection state shared by the week strip and the month picker.
//!
//! Three dates are tracked: the selected day, the Sunday anchoring the
//! visible week, and the month shown in the picker. Each transition below
//! states which of them it moves.

use tracing::debug;

use crate::date::{
    first_of_month, week_anchor_of, week_days, CalendarDate, CalendarError, MonthStart,
    WeekAnchor,
};

/// One step backward or forward, in weeks for the strip or months for the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    pub fn offset(self) -> i32 {
        match self {
            Direction::Back => -1,
            Direction::Forward => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    selected: CalendarDate,
    anchor: WeekAnchor,
    picker_month: MonthStart,
    picker_open: bool,
}

impl SelectionState {
    /// Starts on `today`, showing today's week, picker closed.
    pub fn new(today: CalendarDate) -> Self {
        Self {
            selected: today,
            anchor: week_anchor_of(today),
            picker_month: first_of_month(today),
            picker_open: false,
        }
    }

    pub fn selected(&self) -> CalendarDate {
        self.selected
    }

    pub fn anchor(&self) -> WeekAnchor {
        self.anchor
    }

    pub fn picker_month(&self) -> MonthStart {
        self.picker_month
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.selected == date
    }

    /// The seven days of the visible strip.
    pub fn visible_week(&self) -> [CalendarDate; 7] {
        week_days(self.anchor)
    }

    /// Key for looking up the selected day's workout.
    pub fn workout_key(&self) -> String {
        self.selected.iso_key()
    }

    /// Tap on a day in the week strip. The strip does not move.
    ///
    /// Returns `false` when `date` was already selected and nothing changed.
    pub fn select_date(&mut self, date: CalendarDate) -> bool {
        if self.selected == date {
            return false;
        }
        debug!("select {} (was {})", date, self.selected);
        self.selected = date;
        true
    }

    /// Tap on a day in the month picker: moves the strip to that day's week,
    /// syncs the picker month and closes the picker.
    pub fn pick_from_month_grid(&mut self, date: CalendarDate) {
        debug!("picked {} from month grid", date);
        self.selected = date;
        self.anchor = week_anchor_of(date);
        self.picker_month = first_of_month(date);
        self.picker_open = false;
    }

    /// Moves the strip one week and keeps the same weekday selected.
    ///
    /// Unguarded; callers driven by gestures go through `WeekNavigator`.
    /// On error the state is left untouched.
    pub fn shift_week(&mut self, direction: Direction) -> Result<(), CalendarError> {
        let weekday_offset = self.selected.days_from_sunday();
        let anchor = self.anchor.shift_weeks(i64::from(direction.offset()))?;
        let selected = CalendarDate::new(anchor.day(weekday_offset).naive())?;

        self.anchor = anchor;
        self.selected = selected;
        Ok(())
    }

    /// Shows the picker on the selected day's month.
    pub fn open_picker(&mut self) {
        self.picker_month = first_of_month(self.selected);
        self.picker_open = true;
    }

    /// Pages the picker by one month. Selection and strip are unaffected.
    pub fn navigate_picker_month(&mut self, direction: Direction) -> Result<(), CalendarError> {
        self.picker_month = self.picker_month.shift_months(direction.offset())?;
        debug!(
            "picker month now {}-{:02}",
            self.picker_month.year(),
            self.picker_month.month()
        );
        Ok(())
    }

    /// Hides the picker without changing any date.
    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }
}
