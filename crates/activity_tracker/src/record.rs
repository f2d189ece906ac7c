//! The activity record and its composition from remote lookups.

use chrono::{NaiveDateTime, Timelike};
use ninjas_client::{CalorieEstimate, ExerciseInfo};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Format used for `timestamp` both on screen and on disk.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One tracked exercise session. Fields are read-only once composed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivityRecord {
    activity: String,
    calories_per_hour: f64,
    duration_minutes: u32,
    total_calories: f64,
    weight: Option<u32>,
    #[serde(alias = "date", with = "timestamp_format")]
    timestamp: NaiveDateTime,
    exercise_info: Option<ExerciseInfo>,
}

impl ActivityRecord {
    /// Merge the two lookups into a record stamped with `now`.
    ///
    /// Calorie data is mandatory; exercise info is attached only when present.
    pub fn compose(
        calories: Option<CalorieEstimate>,
        exercise_info: Option<ExerciseInfo>,
        weight: Option<u32>,
        now: NaiveDateTime,
    ) -> TrackerResult<Self> {
        let calories = calories.ok_or(TrackerError::MissingCalorieData)?;
        Ok(Self {
            activity: calories.name,
            calories_per_hour: calories.calories_per_hour,
            duration_minutes: calories.duration_minutes,
            total_calories: calories.total_calories,
            weight,
            // persisted at second precision
            timestamp: now.with_nanosecond(0).unwrap_or(now),
            exercise_info,
        })
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn calories_per_hour(&self) -> f64 {
        self.calories_per_hour
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn total_calories(&self) -> f64 {
        self.total_calories
    }

    pub fn weight(&self) -> Option<u32> {
        self.weight
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn exercise_info(&self) -> Option<&ExerciseInfo> {
        self.exercise_info.as_ref()
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
            .map_err(|e| D::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
    }
}

#[cfg(test)]
pub(crate) fn sample_record(activity: &str, total_calories: f64, minutes: u32) -> ActivityRecord {
    let now = NaiveDateTime::parse_from_str("2025-03-01 07:30:00", TIMESTAMP_FORMAT)
        .expect("fixed timestamp");
    ActivityRecord::compose(
        Some(CalorieEstimate {
            name: activity.to_string(),
            calories_per_hour: total_calories * 60.0 / f64::from(minutes.max(1)),
            duration_minutes: minutes,
            total_calories,
        }),
        None,
        None,
        now,
    )
    .expect("calories present")
}
