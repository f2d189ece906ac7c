//! Fork-join of the two remote lookups behind one `track` call.

use ninjas_client::{CalorieEstimate, ExerciseInfo, NinjasClient, NinjasError};

/// Parameters of one tracking request, already validated by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackRequest {
    pub activity: String,
    pub weight: Option<u32>,
    pub duration: Option<u32>,
}

/// Outcome of both lookups. A failed lookup is `None`; the error has
/// already been reported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fetched {
    pub calories: Option<CalorieEstimate>,
    pub exercise: Option<ExerciseInfo>,
}

/// Run the calorie and exercise lookups concurrently and wait for both.
///
/// A failure in one lookup neither cancels nor affects the other.
pub async fn fetch_both(client: &dyn NinjasClient, request: &TrackRequest) -> Fetched {
    let (calories, exercise) = tokio::join!(
        client.fetch_calories(&request.activity, request.weight, request.duration),
        client.fetch_exercise_info(&request.activity),
    );
    Fetched {
        calories: report("caloriesburned", &request.activity, calories),
        exercise: report("exercises", &request.activity, exercise),
    }
}

fn report<T>(endpoint: &str, activity: &str, result: Result<Option<T>, NinjasError>) -> Option<T> {
    match result {
        Ok(Some(v)) => Some(v),
        Ok(None) => {
            tracing::debug!(endpoint, activity, "empty result");
            None
        }
        Err(e) => {
            tracing::warn!(
                endpoint,
                activity,
                remote_unavailable = e.is_remote_unavailable(),
                "lookup failed: {e}"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedClient;
    use std::time::Duration;

    fn request() -> TrackRequest {
        TrackRequest {
            activity: "running".into(),
            weight: Some(80),
            duration: Some(30),
        }
    }

    #[tokio::test]
    async fn both_succeed() {
        let client = ScriptedClient::running();
        let fetched = fetch_both(&client, &request()).await;
        assert!(fetched.calories.is_some());
        assert!(fetched.exercise.is_some());
        assert_eq!(
            client.calls().await,
            vec![("running".to_string(), Some(80), Some(30))]
        );
    }

    #[tokio::test]
    async fn exercise_failure_does_not_affect_calories() {
        let client = ScriptedClient::running().with_exercise_error();
        let fetched = fetch_both(&client, &request()).await;
        assert!(fetched.calories.is_some());
        assert!(fetched.exercise.is_none());
    }

    #[tokio::test]
    async fn calorie_failure_still_waits_for_exercise() {
        let client = ScriptedClient::running()
            .with_calorie_error()
            .with_exercise_delay(Duration::from_millis(30));
        let fetched = fetch_both(&client, &request()).await;
        assert!(fetched.calories.is_none());
        assert!(fetched.exercise.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn lookups_run_concurrently() {
        let client = ScriptedClient::running()
            .with_calorie_delay(Duration::from_millis(150))
            .with_exercise_delay(Duration::from_millis(150));
        let started = tokio::time::Instant::now();
        fetch_both(&client, &request()).await;
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(150));
        assert!(elapsed < Duration::from_millis(300));
    }
}
