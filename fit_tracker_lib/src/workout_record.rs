use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A historical workout record as returned by the remote history endpoint.
/// Assumed well-formed, only transport success is checked.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub date: NaiveDate,
    pub weight: f64,
}

impl WorkoutRecord {
    pub fn new(date: NaiveDate, weight: f64) -> Self {
        Self { date, weight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_history_payload() {
        let payload = r#"[{"date":"2024-01-01","weight":80.0},{"date":"2024-01-08","weight":82.0}]"#;
        let records: Vec<WorkoutRecord> = serde_json::from_str(payload).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(records[0].weight, 80.0);
        assert_eq!(records[1].weight, 82.0);
    }

    #[test]
    fn rejects_malformed_date() {
        let payload = r#"[{"date":"01/08/2024","weight":82.0}]"#;
        assert!(serde_json::from_str::<Vec<WorkoutRecord>>(payload).is_err());
    }
}
