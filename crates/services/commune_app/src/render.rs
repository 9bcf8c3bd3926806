// --- File: crates/services/commune_app/src/render.rs ---
//! Plain-text rendering of the screens.

use std::fmt::Write;

use commune_calendar::{month_year_label, DayLabel, PickerCell, PickerView, StripCell, WEEKDAY_HEADER};
use commune_profile::ProfileSummary;
use commune_workouts::{WorkoutView, EMPTY_HINT, EMPTY_TITLE, UNAVAILABLE_TITLE};

pub fn render_loading() -> String {
    "Loading...".to_string()
}

pub fn render_login(error: Option<&str>) -> String {
    let mut out = String::from("COMMUNE\nSign in with: login <email> <password>\nNo account? signup <email> <password> <confirm> <full name>");
    if let Some(error) = error {
        let _ = write!(out, "\n! {}", error);
    }
    out
}

/// Week strip as one line, the selected day in brackets.
pub fn render_week_strip(cells: &[StripCell]) -> String {
    cells
        .iter()
        .map(|cell| {
            let label = format!("{} {}", cell.short_name, cell.day_number);
            if cell.selected {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_workout(view: &WorkoutView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.heading());
    match view {
        WorkoutView::Scheduled { record, .. } => {
            let _ = writeln!(out, "  {}", record.title);
            let _ = writeln!(out, "  {}", record.summary);
            for section in &record.sections {
                let _ = writeln!(out, "\n  {}", section.title.to_uppercase());
                for item in &section.items {
                    let _ = writeln!(out, "   • {}", item);
                }
            }
        }
        WorkoutView::Empty { .. } => {
            let _ = writeln!(out, "  {}", EMPTY_TITLE);
            let _ = writeln!(out, "  {}", EMPTY_HINT);
        }
        WorkoutView::Unavailable { message, .. } => {
            let _ = writeln!(out, "  {}", UNAVAILABLE_TITLE);
            let _ = writeln!(out, "  {}", message);
        }
    }
    out.trim_end().to_string()
}

/// Home screen: month label, subtitle, strip and workout.
pub fn render_home(
    strip: &[StripCell],
    subtitle: DayLabel,
    workout: &WorkoutView,
) -> String {
    let month = strip
        .iter()
        .find(|cell| cell.selected)
        .or_else(|| strip.first())
        .map(|cell| month_year_label(cell.date))
        .unwrap_or_default();

    format!(
        "TRAINING  {}\n{}\n{}\n\n{}",
        month,
        subtitle,
        render_week_strip(strip),
        render_workout(workout)
    )
}

pub fn render_picker(view: &PickerView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", WEEKDAY_HEADER.map(|day| format!("{:>4}", day)).join(""));
    for row in view.rows() {
        let line: String = row
            .iter()
            .map(|cell| match cell {
                PickerCell::Blank => "    ".to_string(),
                PickerCell::Day { date, selected: true, .. } => format!("{:>3}*", date.day()),
                PickerCell::Day { date, .. } => format!("{:>4}", date.day()),
            })
            .collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out.trim_end().to_string()
}

pub fn render_profile(summary: &ProfileSummary) -> String {
    format!(
        "({})  {}\n      {}",
        summary.initials, summary.display_name, summary.email
    )
}
