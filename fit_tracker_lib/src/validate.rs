use chrono::NaiveDate;

use crate::workout::{WorkoutDraft, WorkoutEntry};

/// The form fields a validation failure can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ExerciseName,
    Sets,
    Reps,
    Weight,
    Date,
}

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

pub fn validate_exercise_name(raw: &str) -> Result<String, FieldError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FieldError::new(Field::ExerciseName, "Exercise name is required"));
    }
    Ok(name.to_string())
}

pub fn validate_sets(raw: &str) -> Result<i64, FieldError> {
    let Ok(sets) = raw.trim().parse::<i64>() else {
        return Err(FieldError::new(Field::Sets, "Sets must be a number"));
    };
    if sets < 1 {
        return Err(FieldError::new(Field::Sets, "Sets must be at least 1"));
    }
    Ok(sets)
}

pub fn validate_reps(raw: &str) -> Result<i64, FieldError> {
    let Ok(reps) = raw.trim().parse::<i64>() else {
        return Err(FieldError::new(Field::Reps, "Reps must be a number"));
    };
    if reps < 1 {
        return Err(FieldError::new(Field::Reps, "Reps must be at least 1"));
    }
    Ok(reps)
}

pub fn validate_weight(raw: &str) -> Result<f64, FieldError> {
    let Ok(weight) = raw.trim().parse::<f64>() else {
        return Err(FieldError::new(Field::Weight, "Weight must be a number"));
    };
    // NaN parses, but fails the comparison and is rejected with the rest
    if !(weight >= 0.0) {
        return Err(FieldError::new(Field::Weight, "Weight must be at least 0"));
    }
    Ok(weight)
}

pub fn validate_date(raw: &str) -> Result<NaiveDate, FieldError> {
    let date = raw.trim();
    if date.is_empty() {
        return Err(FieldError::new(Field::Date, "Date is required"));
    }
    let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return Err(FieldError::new(Field::Date, "Date must be a valid date"));
    };
    Ok(date)
}

/// Runs every field validator over a raw draft and collects all failures.
/// Only a fully valid draft produces an entry.
pub fn validate_workout(draft: &WorkoutDraft) -> Result<WorkoutEntry, Vec<FieldError>> {
    let mut errors = Vec::new();

    let exercise_name = validate_exercise_name(&draft.exercise_name)
        .map_err(|err| errors.push(err))
        .ok();
    let sets = validate_sets(&draft.sets).map_err(|err| errors.push(err)).ok();
    let reps = validate_reps(&draft.reps).map_err(|err| errors.push(err)).ok();
    let weight = validate_weight(&draft.weight).map_err(|err| errors.push(err)).ok();
    let date = validate_date(&draft.date).map_err(|err| errors.push(err)).ok();

    match (exercise_name, sets, reps, weight, date) {
        (Some(exercise_name), Some(sets), Some(reps), Some(weight), Some(date)) => {
            Ok(WorkoutEntry::new(exercise_name, sets, reps, weight, date))
        }
        _ => Err(errors),
    }
}
