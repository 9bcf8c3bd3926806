// --- File: crates/commune_workouts/src/demo.rs ---
//! Sample workouts used to seed the in-memory source.

use commune_calendar::CalendarDate;
use commune_common::models::{WorkoutRecord, WorkoutSection};

fn section(title: &str, items: &[&str]) -> WorkoutSection {
    WorkoutSection {
        title: title.to_string(),
        items: items.iter().map(|item| item.to_string()).collect(),
    }
}

pub fn strength_and_conditioning() -> WorkoutRecord {
    WorkoutRecord {
        title: "Strength + Conditioning".to_string(),
        summary: "Back Squat + 12-min AMRAP".to_string(),
        sections: vec![
            section(
                "Warm-up",
                &[
                    "5 min row @ easy pace",
                    "10 air squats",
                    "10 leg swings each side",
                    "10 walking lunges",
                    "2×5 back squats @ 50%",
                ],
            ),
            section(
                "Strength",
                &[
                    "Back Squat: 5×5 @ 80% 1RM",
                    "Rest 3 min between sets",
                    "Focus on depth and control",
                ],
            ),
            section(
                "Metcon",
                &[
                    "12-min AMRAP:",
                    "15 box jumps (24/20\")",
                    "20 wall balls (20/14#)",
                    "25 double unders",
                ],
            ),
            section("Accessory", &["3×10 GHD sit-ups", "3×15 banded good mornings"]),
        ],
    }
}

pub fn endurance_and_skill() -> WorkoutRecord {
    WorkoutRecord {
        title: "Endurance + Skill".to_string(),
        summary: "5K Run + Handstand Practice".to_string(),
        sections: vec![
            section(
                "Warm-up",
                &["10 min dynamic stretching", "400m jog", "10 burpees"],
            ),
            section("Metcon", &["5K Run for time", "Target pace: 7:00/mile"]),
            section(
                "Skill",
                &["Handstand hold practice: 5×30s", "Wall walks: 3×5"],
            ),
        ],
    }
}

pub fn olympic_lifting() -> WorkoutRecord {
    WorkoutRecord {
        title: "Olympic Lifting".to_string(),
        summary: "Snatch Complex + Conditioning".to_string(),
        sections: vec![
            section(
                "Warm-up",
                &[
                    "5 min bike",
                    "Shoulder mobility circuit",
                    "Empty bar snatch drills",
                ],
            ),
            section("Strength", &["Snatch: 3×3 @ 75%", "Snatch pull: 3×3 @ 90%"]),
            section(
                "Metcon",
                &[
                    "For time:",
                    "21-15-9",
                    "Snatch (95/65#)",
                    "Burpee box jump overs",
                ],
            ),
        ],
    }
}

/// The three sample workouts scheduled on `today`, tomorrow and the day
/// after. Days past the end of the calendar are skipped.
pub fn demo_workouts(today: CalendarDate) -> Vec<(CalendarDate, WorkoutRecord)> {
    [
        (0, strength_and_conditioning()),
        (1, endurance_and_skill()),
        (2, olympic_lifting()),
    ]
    .into_iter()
    .filter_map(|(offset, record)| today.shift_days(offset).ok().map(|date| (date, record)))
    .collect()
}
