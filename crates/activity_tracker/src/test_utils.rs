//! Shared test utilities: a scripted in-process `NinjasClient`.
//!
//! Keep this module `#[cfg(test)]`-only.
#![cfg(test)]

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use ninjas_client::{CalorieEstimate, ExerciseInfo, NinjasClient, NinjasError};

type Call = (String, Option<u32>, Option<u32>);

/// Mock client returning fixed payloads, optionally delayed or failing.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    calories: Option<CalorieEstimate>,
    exercise: Option<ExerciseInfo>,
    calorie_error: bool,
    exercise_error: bool,
    calorie_delay: Option<Duration>,
    exercise_delay: Option<Duration>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedClient {
    /// Both lookups succeed with a 30 minute run.
    pub fn running() -> Self {
        Self {
            calories: Some(CalorieEstimate {
                name: "Running, 5 mph (12 minute mile)".into(),
                calories_per_hour: 600.0,
                duration_minutes: 30,
                total_calories: 300.0,
            }),
            exercise: Some(ExerciseInfo {
                name: Some("Running".into()),
                exercise_type: Some("cardio".into()),
                muscle: Some("quadriceps".into()),
                equipment: Some("body_only".into()),
                difficulty: Some("beginner".into()),
                instructions: None,
                extra: Default::default(),
            }),
            ..Default::default()
        }
    }

    pub fn without_calories(mut self) -> Self {
        self.calories = None;
        self
    }

    pub fn without_exercise(mut self) -> Self {
        self.exercise = None;
        self
    }

    pub fn with_calorie_error(mut self) -> Self {
        self.calorie_error = true;
        self
    }

    pub fn with_exercise_error(mut self) -> Self {
        self.exercise_error = true;
        self
    }

    pub fn with_calorie_delay(mut self, d: Duration) -> Self {
        self.calorie_delay = Some(d);
        self
    }

    pub fn with_exercise_delay(mut self, d: Duration) -> Self {
        self.exercise_delay = Some(d);
        self
    }

    /// Calorie lookups seen so far as `(activity, weight, duration)`.
    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }
}

fn unavailable() -> NinjasError {
    NinjasError::Status {
        status: 503,
        body: "service unavailable".into(),
    }
}

#[async_trait]
impl NinjasClient for ScriptedClient {
    async fn fetch_calories(
        &self,
        activity: &str,
        weight: Option<u32>,
        duration: Option<u32>,
    ) -> Result<Option<CalorieEstimate>, NinjasError> {
        self.calls
            .lock()
            .await
            .push((activity.to_string(), weight, duration));
        if let Some(d) = self.calorie_delay {
            tokio::time::sleep(d).await;
        }
        if self.calorie_error {
            return Err(unavailable());
        }
        Ok(self.calories.clone())
    }

    async fn fetch_exercise_info(
        &self,
        _activity: &str,
    ) -> Result<Option<ExerciseInfo>, NinjasError> {
        if let Some(d) = self.exercise_delay {
            tokio::time::sleep(d).await;
        }
        if self.exercise_error {
            return Err(unavailable());
        }
        Ok(self.exercise.clone())
    }
}
