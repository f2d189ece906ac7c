use serde::Serialize;

use crate::record::ActivityRecord;

/// Totals derived from the whole activity log.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct Stats {
    pub total_activities: usize,
    pub total_calories: f64,
    pub total_minutes: u64,
    pub avg_calories_per_activity: f64,
}

impl Stats {
    /// Split `total_minutes` into whole hours and the remaining minutes.
    pub fn hours_and_minutes(&self) -> (u64, u64) {
        (self.total_minutes / 60, self.total_minutes % 60)
    }
}

pub fn compute_stats(records: &[ActivityRecord]) -> Stats {
    let total_activities = records.len();
    let total_calories: f64 = records.iter().map(ActivityRecord::total_calories).sum();
    let total_minutes: u64 = records
        .iter()
        .map(|r| u64::from(r.duration_minutes()))
        .sum();
    let avg_calories_per_activity = if total_activities > 0 {
        total_calories / total_activities as f64
    } else {
        0.0
    };
    Stats {
        total_activities,
        total_calories,
        total_minutes,
        avg_calories_per_activity,
    }
}
