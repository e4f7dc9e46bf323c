use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single user-logged exercise record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub exercise_name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    pub date: NaiveDate,
}

impl WorkoutEntry {
    pub fn new(exercise_name: String, sets: i64, reps: i64, weight: f64, date: NaiveDate) -> Self {
        Self {
            exercise_name,
            sets,
            reps,
            weight,
            date,
        }
    }
}

/// Raw form values as read from the UI controls, before any validation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutDraft {
    pub exercise_name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
    pub date: String,
}
