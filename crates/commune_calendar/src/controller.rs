// --- File: crates/commune_calendar/src/controller.rs ---
//! Event entry point for the training screen.
//!
//! UI input arrives as `CalendarEvent`s, one at a time, and each is applied
//! completely before the next. The returned `CalendarUpdate` tells the caller
//! whether the selected day's workout needs reloading.

use std::time::{Duration, Instant};

use commune_config::CalendarConfig;
use tracing::debug;

use crate::date::{subtitle_for, CalendarDate, CalendarError, DayLabel};
use crate::gesture::SwipeClassifier;
use crate::navigation::{NavigationOutcome, WeekNavigator};
use crate::picker::{build_week_strip, picker_view, PickerView, StripCell};
use crate::selection::{Direction, SelectionState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalendarEvent {
    /// Tap on a day card in the week strip.
    TapStripDay(CalendarDate),
    /// Tap on a day in the month picker.
    TapGridDay(CalendarDate),
    /// Finger moved while dragging on the strip.
    DragMove { dx: f64, dy: f64 },
    /// Finger lifted after a drag.
    DragRelease { dx: f64, vx: f64 },
    /// Explicit week step, e.g. from a keyboard shortcut.
    StepWeek(Direction),
    OpenPicker,
    ClosePicker,
    StepPickerMonth(Direction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarUpdate {
    Unchanged,
    /// The selected day changed; reload its workout.
    SelectionChanged,
    /// Only the picker changed (opened, closed or paged).
    PickerChanged,
    /// A drag on the strip was recognized as a week swipe.
    Tracking,
    /// A week change was dropped because the previous one is cooling down.
    Busy { remaining: Duration },
    Rejected(CalendarError),
}

#[derive(Debug, Clone)]
pub struct CalendarController {
    state: SelectionState,
    navigator: WeekNavigator,
    classifier: SwipeClassifier,
    drag_claimed: bool,
}

impl CalendarController {
    pub fn new(today: CalendarDate, config: &CalendarConfig) -> Self {
        Self::with_parts(
            today,
            WeekNavigator::from_config(config),
            SwipeClassifier::from_config(&config.swipe),
        )
    }

    pub fn with_parts(
        today: CalendarDate,
        navigator: WeekNavigator,
        classifier: SwipeClassifier,
    ) -> Self {
        Self {
            state: SelectionState::new(today),
            navigator,
            classifier,
            drag_claimed: false,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn subtitle(&self, today: CalendarDate) -> DayLabel {
        subtitle_for(self.state.selected(), today)
    }

    pub fn week_strip(&self) -> Vec<StripCell> {
        build_week_strip(&self.state)
    }

    /// The picker grid, when the picker is open.
    pub fn picker(&self) -> Option<PickerView> {
        self.state.is_picker_open().then(|| picker_view(&self.state))
    }

    pub fn handle(&mut self, event: CalendarEvent, now: Instant) -> CalendarUpdate {
        match event {
            CalendarEvent::TapStripDay(date) => {
                if self.state.select_date(date) {
                    CalendarUpdate::SelectionChanged
                } else {
                    CalendarUpdate::Unchanged
                }
            }
            CalendarEvent::TapGridDay(date) => {
                let changed = !self.state.is_selected(date);
                self.state.pick_from_month_grid(date);
                if changed {
                    CalendarUpdate::SelectionChanged
                } else {
                    CalendarUpdate::PickerChanged
                }
            }
            CalendarEvent::DragMove { dx, dy } => {
                if self.drag_claimed {
                    return CalendarUpdate::Tracking;
                }
                if self.classifier.claims(dx, dy) {
                    debug!("drag claimed as week swipe (dx={}, dy={})", dx, dy);
                    self.drag_claimed = true;
                    CalendarUpdate::Tracking
                } else {
                    CalendarUpdate::Unchanged
                }
            }
            CalendarEvent::DragRelease { dx, vx } => {
                let claimed = std::mem::replace(&mut self.drag_claimed, false);
                if !claimed {
                    return CalendarUpdate::Unchanged;
                }
                match self.classifier.classify_release(dx, vx) {
                    Some(direction) => self.step_week(direction, now),
                    None => CalendarUpdate::Unchanged,
                }
            }
            CalendarEvent::StepWeek(direction) => self.step_week(direction, now),
            CalendarEvent::OpenPicker => {
                self.state.open_picker();
                CalendarUpdate::PickerChanged
            }
            CalendarEvent::ClosePicker => {
                self.state.close_picker();
                CalendarUpdate::PickerChanged
            }
            CalendarEvent::StepPickerMonth(direction) => {
                match self.state.navigate_picker_month(direction) {
                    Ok(()) => CalendarUpdate::PickerChanged,
                    Err(err) => CalendarUpdate::Rejected(err),
                }
            }
        }
    }

    fn step_week(&mut self, direction: Direction, now: Instant) -> CalendarUpdate {
        match self.navigator.advance_week(&mut self.state, direction, now) {
            NavigationOutcome::Moved { .. } => CalendarUpdate::SelectionChanged,
            NavigationOutcome::Busy { remaining } => CalendarUpdate::Busy { remaining },
            NavigationOutcome::Rejected(err) => CalendarUpdate::Rejected(err),
        }
    }
}
