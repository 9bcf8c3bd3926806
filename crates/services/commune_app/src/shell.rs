// --- File: crates/services/commune_app/src/shell.rs ---
//! Applies parsed commands to the app state and renders the result.
//!
//! The active screen follows the session: `Loading` until the stored
//! session was checked, then `Login` or `Home`.

use std::time::Instant;

use commune_auth::{login_error_message, signup_error_message, Screen, SignupForm, SignupOutcome, SignupFailure};
use commune_calendar::{CalendarEvent, CalendarUpdate, Direction};
use commune_profile::ProfileSummary;
use tracing::debug;

use crate::app_state::AppState;
use crate::commands::{Command, HELP};
use crate::render::{render_home, render_loading, render_login, render_picker, render_profile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutput {
    pub text: String,
    pub quit: bool,
}

impl ShellOutput {
    fn show(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

/// Checks for a stored session and renders the first screen.
pub async fn start(state: &mut AppState) -> ShellOutput {
    state.session.initialize().await;
    render_current(state, None).await
}

pub async fn execute(state: &mut AppState, command: Command, now: Instant) -> ShellOutput {
    match command {
        Command::Quit => {
            return ShellOutput {
                text: "Bye.".to_string(),
                quit: true,
            }
        }
        Command::Help => return ShellOutput::show(HELP),
        _ => {}
    }

    match state.session.active_screen() {
        Screen::Loading => ShellOutput::show(render_loading()),
        Screen::Login => execute_signed_out(state, command).await,
        Screen::Home => execute_signed_in(state, command, now).await,
    }
}

async fn execute_signed_out(state: &mut AppState, command: Command) -> ShellOutput {
    match command {
        Command::Login { email, password } => match state.session.login(&email, &password).await {
            Ok(()) => render_current(state, None).await,
            Err(err) => ShellOutput::show(render_login(Some(&login_error_message(&err)))),
        },
        Command::Signup {
            full_name,
            email,
            password,
            confirm_password,
        } => {
            let form = SignupForm {
                full_name,
                email,
                password,
                confirm_password,
            };
            match state.session.signup(&form).await {
                Ok(SignupOutcome::SignedIn) => render_current(state, None).await,
                Ok(SignupOutcome::ConfirmationPending) => ShellOutput::show(render_login(Some(
                    SignupFailure::ConfirmationPending.user_message(),
                ))),
                Err(err) => ShellOutput::show(render_login(Some(&signup_error_message(&err)))),
            }
        }
        _ => ShellOutput::show(render_login(Some("Please sign in first"))),
    }
}

async fn execute_signed_in(state: &mut AppState, command: Command, now: Instant) -> ShellOutput {
    let event = match command {
        Command::Logout => {
            return match state.session.logout().await {
                Ok(()) => render_current(state, None).await,
                Err(err) => render_current(state, Some(format!("Logout failed: {}", err))).await,
            };
        }
        Command::Profile => {
            let profile = state.session.profile();
            let session = state.session.current_session();
            let summary = ProfileSummary::new(profile.as_ref(), session.as_ref().map(|s| &s.user));
            return ShellOutput::show(render_profile(&summary));
        }
        Command::Login { .. } | Command::Signup { .. } => {
            return render_current(state, Some("Already signed in".to_string())).await;
        }
        Command::Next => CalendarEvent::StepWeek(Direction::Forward),
        Command::Prev => CalendarEvent::StepWeek(Direction::Back),
        Command::Select(index) => {
            let strip = state.calendar.week_strip();
            match strip.get(index as usize) {
                Some(cell) => CalendarEvent::TapStripDay(cell.date),
                None => return render_current(state, None).await,
            }
        }
        Command::Swipe { dx, vx } => {
            // A terminal swipe is one drag: claim it, then release it
            state.calendar.handle(CalendarEvent::DragMove { dx, dy: 0.0 }, now);
            CalendarEvent::DragRelease { dx, vx }
        }
        Command::Picker => CalendarEvent::OpenPicker,
        Command::PickerNext => CalendarEvent::StepPickerMonth(Direction::Forward),
        Command::PickerPrev => CalendarEvent::StepPickerMonth(Direction::Back),
        Command::Pick(date) => CalendarEvent::TapGridDay(date),
        Command::Done => CalendarEvent::ClosePicker,
        Command::Help | Command::Quit => return ShellOutput::show(HELP),
    };

    let notice = match state.calendar.handle(event, now) {
        CalendarUpdate::SelectionChanged => {
            state.reload_workout().await;
            None
        }
        CalendarUpdate::Busy { remaining } => {
            debug!("week change dropped, {:?} left", remaining);
            Some(format!("Still moving, try again in {} ms", remaining.as_millis()))
        }
        CalendarUpdate::Rejected(err) => Some(err.to_string()),
        CalendarUpdate::Unchanged | CalendarUpdate::PickerChanged | CalendarUpdate::Tracking => None,
    };
    render_current(state, notice).await
}

/// Renders the screen matching the session, loading the workout on first
/// entry to `Home`.
async fn render_current(state: &mut AppState, notice: Option<String>) -> ShellOutput {
    let text = match state.session.active_screen() {
        Screen::Loading => render_loading(),
        Screen::Login => render_login(notice.as_deref()),
        Screen::Home => {
            if state.workout().is_none() {
                state.reload_workout().await;
            }
            let mut text = match state.calendar.picker() {
                Some(picker) => render_picker(&picker),
                None => {
                    let strip = state.calendar.week_strip();
                    let subtitle = state.calendar.subtitle(state.today());
                    match state.workout() {
                        Some(workout) => render_home(&strip, subtitle, workout),
                        None => render_loading(),
                    }
                }
            };
            if let Some(notice) = notice {
                text.push_str("\n! ");
                text.push_str(&notice);
            }
            text
        }
    };
    ShellOutput::show(text)
}
