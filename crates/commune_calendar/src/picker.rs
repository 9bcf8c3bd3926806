// --- File: crates/commune_calendar/src/picker.rs ---
//! Month picker grid and week strip cells, ready for rendering.

use crate::date::{month_grid, month_year_label, short_day_name, CalendarDate, MonthStart};
use crate::selection::SelectionState;

/// Column headings of the picker grid, Sunday first.
pub const WEEKDAY_HEADER: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerCell {
    Blank,
    Day {
        date: CalendarDate,
        selected: bool,
        /// False would dim the cell; the grid only holds the picker month's days.
        in_month: bool,
    },
}

impl PickerCell {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            PickerCell::Blank => None,
            PickerCell::Day { date, .. } => Some(*date),
        }
    }
}

/// Grid for `month` with the selected day flagged.
pub fn build_picker_grid(month: MonthStart, selected: CalendarDate) -> Vec<PickerCell> {
    month_grid(month)
        .into_iter()
        .map(|cell| match cell {
            None => PickerCell::Blank,
            Some(date) => PickerCell::Day {
                date,
                selected: date == selected,
                in_month: month.contains(date),
            },
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    /// e.g. "APRIL 2024"
    pub title: String,
    pub cells: Vec<PickerCell>,
}

impl PickerView {
    /// Cells split into rows of seven; the last row may be short.
    pub fn rows(&self) -> impl Iterator<Item = &[PickerCell]> {
        self.cells.chunks(7)
    }
}

pub fn picker_view(state: &SelectionState) -> PickerView {
    let month = state.picker_month();
    PickerView {
        title: month_year_label(month.date()),
        cells: build_picker_grid(month, state.selected()),
    }
}

/// One day card of the week strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripCell {
    pub date: CalendarDate,
    /// e.g. "Wed"
    pub short_name: String,
    pub day_number: u32,
    pub selected: bool,
}

pub fn build_week_strip(state: &SelectionState) -> Vec<StripCell> {
    state
        .visible_week()
        .into_iter()
        .map(|date| StripCell {
            date,
            short_name: short_day_name(date),
            day_number: date.day(),
            selected: state.is_selected(date),
        })
        .collect()
}
