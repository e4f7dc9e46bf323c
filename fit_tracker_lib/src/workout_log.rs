use crate::validate::{validate_workout, FieldError};
use crate::workout::{WorkoutDraft, WorkoutEntry};

/// Insertion-ordered list of the workouts logged in the current page
/// session. Nothing is persisted, a page reload starts empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutLog {
    entries: Vec<WorkoutEntry>,
}

impl WorkoutLog {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Validates a raw draft and appends it on success. On failure the
    /// log is left untouched and every offending field is reported.
    pub fn submit(&mut self, draft: &WorkoutDraft) -> Result<(), Vec<FieldError>> {
        let entry = validate_workout(draft)?;
        self.entries.push(entry);
        Ok(())
    }

    pub fn entries(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Field;

    fn draft(name: &str, weight: &str) -> WorkoutDraft {
        WorkoutDraft {
            exercise_name: name.into(),
            sets: "3".into(),
            reps: "8".into(),
            weight: weight.into(),
            date: "2024-01-01".into(),
        }
    }

    #[test]
    fn accepted_entries_append_in_order() {
        let mut log = WorkoutLog::new();

        log.submit(&draft("Bench Press", "80")).unwrap();
        log.submit(&draft("Squat", "120")).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].exercise_name, "Bench Press");
        assert_eq!(log.entries()[1].exercise_name, "Squat");
    }

    #[test]
    fn rejected_submission_leaves_log_unchanged() {
        let mut log = WorkoutLog::new();
        log.submit(&draft("Bench Press", "80")).unwrap();
        let before = log.clone();

        let errors = log.submit(&draft("", "80")).unwrap_err();

        assert_eq!(errors[0].field, Field::ExerciseName);
        assert_eq!(log, before);
    }

    #[test]
    fn identical_submissions_each_append() {
        let mut log = WorkoutLog::new();

        log.submit(&draft("Deadlift", "140")).unwrap();
        log.submit(&draft("Deadlift", "140")).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0], log.entries()[1]);
    }

    #[test]
    fn prior_entries_survive_later_submissions() {
        let mut log = WorkoutLog::new();
        log.submit(&draft("Bench Press", "80")).unwrap();
        let first = log.entries()[0].clone();

        log.submit(&draft("Squat", "120")).unwrap();

        assert_eq!(log.entries()[0], first);
    }
}
