// --- File: crates/commune_calendar/src/navigation.rs ---
//! Week navigation with a cooldown between moves.
//!
//! A week change starts a fixed cooldown during which further week changes
//! are rejected. The guard is a two-state machine: a move is only possible
//! from `Idle`, and `Navigating` carries the instant it ends. The cooldown
//! always runs out; nothing cancels it.

use std::time::{Duration, Instant};

use commune_config::CalendarConfig;
use tracing::debug;

use crate::date::{CalendarDate, CalendarError, WeekAnchor};
use crate::selection::{Direction, SelectionState};

/// Default pause between two week changes.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPhase {
    Idle,
    Navigating { until: Instant },
}

/// What happened to a week-change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Moved {
        anchor: WeekAnchor,
        selected: CalendarDate,
    },
    /// A previous move is still cooling down; nothing changed.
    Busy { remaining: Duration },
    /// The move would leave the supported date range; nothing changed.
    Rejected(CalendarError),
}

#[derive(Debug, Clone)]
pub struct WeekNavigator {
    phase: NavigationPhase,
    cooldown: Duration,
}

impl Default for WeekNavigator {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl WeekNavigator {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            phase: NavigationPhase::Idle,
            cooldown,
        }
    }

    pub fn from_config(config: &CalendarConfig) -> Self {
        Self::new(Duration::from_millis(config.cooldown_ms))
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Current phase as of `now`, returning to `Idle` once the cooldown ended.
    pub fn settle(&mut self, now: Instant) -> NavigationPhase {
        if let NavigationPhase::Navigating { until } = self.phase {
            if now >= until {
                debug!("navigation cooldown elapsed");
                self.phase = NavigationPhase::Idle;
            }
        }
        self.phase
    }

    /// Moves `state` one week in `direction` if no move is cooling down.
    pub fn advance_week(
        &mut self,
        state: &mut SelectionState,
        direction: Direction,
        now: Instant,
    ) -> NavigationOutcome {
        match self.settle(now) {
            NavigationPhase::Navigating { until } => {
                let remaining = until.saturating_duration_since(now);
                debug!("week change {:?} ignored, {:?} cooldown left", direction, remaining);
                NavigationOutcome::Busy { remaining }
            }
            NavigationPhase::Idle => match state.shift_week(direction) {
                Ok(()) => {
                    self.phase = NavigationPhase::Navigating {
                        until: now + self.cooldown,
                    };
                    debug!(
                        "week moved {:?}: anchor {}, selected {}",
                        direction,
                        state.anchor().date(),
                        state.selected()
                    );
                    NavigationOutcome::Moved {
                        anchor: state.anchor(),
                        selected: state.selected(),
                    }
                }
                Err(err) => {
                    debug!("week change {:?} rejected: {}", direction, err);
                    NavigationOutcome::Rejected(err)
                }
            },
        }
    }
}
