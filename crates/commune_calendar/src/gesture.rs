// --- File: crates/commune_calendar/src/gesture.rs ---
//! Classifies horizontal drags on the week strip.
//!
//! Displacements are in pixels, velocities in pixels per millisecond.
//! Positive `dx` is a drag to the right, which reveals the previous week.

use commune_config::SwipeConfig;

use crate::selection::Direction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeClassifier {
    intent_px: f64,
    distance_px: f64,
    velocity: f64,
}

impl Default for SwipeClassifier {
    fn default() -> Self {
        Self::from_config(&SwipeConfig::default())
    }
}

impl SwipeClassifier {
    pub fn from_config(config: &SwipeConfig) -> Self {
        Self {
            intent_px: config.intent_px,
            distance_px: config.distance_px,
            velocity: config.velocity,
        }
    }

    /// Whether an in-progress drag should be handled as a week swipe.
    /// Mostly-vertical or tiny drags are left to the content below.
    pub fn claims(&self, dx: f64, dy: f64) -> bool {
        dx.abs() > dy.abs() && dx.abs() > self.intent_px
    }

    /// The week change a released drag asks for, if any.
    ///
    /// Rightward motion is checked first, so a release that is both far right
    /// and fast left still goes back a week.
    pub fn classify_release(&self, dx: f64, vx: f64) -> Option<Direction> {
        if dx > self.distance_px || vx > self.velocity {
            Some(Direction::Back)
        } else if dx < -self.distance_px || vx < -self.velocity {
            Some(Direction::Forward)
        } else {
            None
        }
    }
}
