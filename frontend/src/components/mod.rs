pub mod dashboard;
pub mod layout;
pub mod nutrition;
pub mod progress;
pub mod progress_chart;
pub mod settings;
pub mod workouts;
