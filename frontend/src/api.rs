use std::fmt;

use fit_tracker_lib::workout_record::WorkoutRecord;
use gloo_net::http::Request;

/// Relative URL of the workout history endpoint.
pub const WORKOUT_HISTORY_URL: &str = "/api/workouts";

/// Failure modes of a fetch. `Display` is the text shown to the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Network,
    Status(u16),
    Decode,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network => write!(f, "Could not reach the server"),
            ApiError::Status(code) => write!(f, "Server responded with status {code}"),
            ApiError::Decode => write!(f, "Server response could not be read"),
        }
    }
}

pub async fn make_request<ReturnType>(path: &str) -> Result<ReturnType, ApiError>
where
    ReturnType: serde::de::DeserializeOwned,
{
    let Ok(response) = Request::get(path).send().await else {
        return Err(ApiError::Network);
    };

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let Ok(result) = response.json::<ReturnType>().await else {
        return Err(ApiError::Decode);
    };

    Ok(result)
}

pub async fn fetch_workout_history() -> Result<Vec<WorkoutRecord>, ApiError> {
    make_request(WORKOUT_HISTORY_URL).await
}
