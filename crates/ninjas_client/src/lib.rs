//! Minimal `NinjasClient` trait and the wire types of the API Ninjas
//! calorie and exercise endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;

#[derive(Debug, Error)]
pub enum NinjasError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("configuration error: {0}")]
    Config(String),
}

impl NinjasError {
    /// True for failures of the remote service itself (transport errors,
    /// timeouts and non-success responses), as opposed to local misconfiguration.
    pub fn is_remote_unavailable(&self) -> bool {
        matches!(self, NinjasError::Http(_) | NinjasError::Status { .. })
    }
}

/// One entry of the `caloriesburned` response list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalorieEstimate {
    pub name: String,
    pub calories_per_hour: f64,
    pub duration_minutes: u32,
    pub total_calories: f64,
}

/// One entry of the `exercises` response list.
///
/// Every field is optional: the service omits what it does not know and the
/// tracker stores whatever came back. Keys without a named field are kept
/// in `extra` so the entry survives a save and reload unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub exercise_type: Option<String>,
    #[serde(default)]
    pub muscle: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[async_trait]
pub trait NinjasClient: Send + Sync + 'static {
    /// Estimate calories burned for `activity`.
    ///
    /// Returns `Ok(None)` when the service knows no matching activity.
    async fn fetch_calories(
        &self,
        activity: &str,
        weight: Option<u32>,
        duration: Option<u32>,
    ) -> Result<Option<CalorieEstimate>, NinjasError>;

    /// Look up exercise metadata by name.
    ///
    /// Returns `Ok(None)` when the service returns an empty list.
    async fn fetch_exercise_info(&self, activity: &str)
    -> Result<Option<ExerciseInfo>, NinjasError>;
}
