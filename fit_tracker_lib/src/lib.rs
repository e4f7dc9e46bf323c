pub mod chart;
pub mod date_format;
pub mod validate;
pub mod workout;
pub mod workout_log;
pub mod workout_record;
