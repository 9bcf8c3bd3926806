//! Test fixtures for workout source tests

use commune_common::models::{WorkoutRecord, WorkoutSection};
use serde_json::{json, Value};

/// A workout as the backend serves it
pub fn workout_json() -> Value {
    json!({
        "title": "Gymnastics",
        "summary": "Muscle-up progressions",
        "sections": [
            { "title": "Warm-up", "items": ["Kipping drills", "Ring rows"] },
            { "title": "Skill", "items": ["Banded transitions: 5×3"] }
        ]
    })
}

/// The record `workout_json` deserializes to
pub fn workout_record() -> WorkoutRecord {
    WorkoutRecord {
        title: "Gymnastics".to_string(),
        summary: "Muscle-up progressions".to_string(),
        sections: vec![
            WorkoutSection {
                title: "Warm-up".to_string(),
                items: vec!["Kipping drills".to_string(), "Ring rows".to_string()],
            },
            WorkoutSection {
                title: "Skill".to_string(),
                items: vec!["Banded transitions: 5×3".to_string()],
            },
        ],
    }
}
