//! Interactive menu, prompt parsing and console rendering.
//!
//! Parsing and rendering are plain functions so they can be tested without
//! a terminal; only [`run_menu`] touches stdin/stdout.

use std::fmt::Write as _;
use std::time::Duration;

use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

use crate::error::TrackerError;
use crate::fetcher::TrackRequest;
use crate::record::ActivityRecord;
use crate::stats::Stats;
use crate::tracker::ActivityTracker;
use crate::translate::normalize_activity;

pub const MIN_WEIGHT_KG: i64 = 50;
pub const MAX_WEIGHT_KG: i64 = 500;
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Rejected prompt input. Never reaches the tracker.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("weight must be a whole number of kilograms")]
    WeightFormat,
    #[error("weight must be between 50 and 500 kg")]
    WeightOutOfRange,
    #[error("duration must be a positive whole number of minutes")]
    DurationFormat,
    #[error("activity name must not be empty")]
    EmptyActivity,
}

/// Blank means no weight.
pub fn parse_weight(raw: &str) -> Result<Option<u32>, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let kg: i64 = raw.parse().map_err(|_| InputError::WeightFormat)?;
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&kg) {
        return Err(InputError::WeightOutOfRange);
    }
    u32::try_from(kg)
        .map(Some)
        .map_err(|_| InputError::WeightOutOfRange)
}

/// Blank means [`DEFAULT_DURATION_MINUTES`].
pub fn parse_duration(raw: &str) -> Result<u32, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_DURATION_MINUTES);
    }
    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err(InputError::DurationFormat),
        Ok(m) => Ok(m),
    }
}

/// Normalize and translate the activity name typed at the prompt.
pub fn parse_activity(raw: &str) -> Result<String, InputError> {
    let name = normalize_activity(raw);
    if name.is_empty() {
        return Err(InputError::EmptyActivity);
    }
    Ok(name)
}

pub fn render_record(record: &ActivityRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out, "Activity: {}", record.activity());
    let _ = writeln!(out, "Date: {}", record.formatted_timestamp());
    let _ = writeln!(out, "Duration: {} min", record.duration_minutes());
    let _ = writeln!(out, "Calories burned: {}", record.total_calories());
    if let Some(info) = record.exercise_info() {
        let na = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());
        let _ = writeln!(out);
        let _ = writeln!(out, "Exercise info:");
        let _ = writeln!(out, "Type: {}", na(&info.exercise_type));
        let _ = writeln!(out, "Muscle: {}", na(&info.muscle));
        let _ = writeln!(out, "Equipment: {}", na(&info.equipment));
        let _ = writeln!(out, "Difficulty: {}", na(&info.difficulty));
    }
    out
}

pub fn render_history(records: &[ActivityRecord]) -> String {
    if records.is_empty() {
        return "No activities recorded yet.\n".to_string();
    }
    let mut out = String::from("Activity history:\n");
    for (i, r) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} - {} ({} min, {} kcal)",
            i + 1,
            r.formatted_timestamp(),
            r.activity(),
            r.duration_minutes(),
            r.total_calories()
        );
    }
    out
}

pub fn render_stats(stats: &Stats) -> String {
    let (hours, minutes) = stats.hours_and_minutes();
    let mut out = String::from("ACTIVITY STATISTICS\n");
    let _ = writeln!(out, "Total activities: {}", stats.total_activities);
    let _ = writeln!(
        out,
        "Total time: {} min ({} h {} min)",
        stats.total_minutes, hours, minutes
    );
    let _ = writeln!(out, "Total calories burned: {}", stats.total_calories);
    let _ = writeln!(
        out,
        "Average calories per activity: {:.1}",
        stats.avg_calories_per_activity
    );
    out
}

fn prompt_parsed<T>(
    prompt: &str,
    parse: fn(&str) -> Result<T, InputError>,
) -> anyhow::Result<T> {
    let raw: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(move |input: &String| {
            parse(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(parse(&raw)?)
}

async fn add_activity(tracker: &mut ActivityTracker) -> anyhow::Result<()> {
    let activity = prompt_parsed("Activity", parse_activity)?;
    let weight = prompt_parsed("Weight (kg, optional)", parse_weight)?;
    let duration = prompt_parsed("Duration (min, optional)", parse_duration)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Looking up {activity}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = tracker
        .track(TrackRequest {
            activity,
            weight,
            duration: Some(duration),
        })
        .await;
    spinner.finish_and_clear();

    match result {
        Ok(record) => print!("{}", render_record(&record)),
        Err(TrackerError::MissingCalorieData) => {
            println!("Could not get calorie data; nothing was recorded.")
        }
        Err(e @ TrackerError::Persistence { .. }) => {
            tracing::error!("{e}");
            println!("The activity was NOT saved: {e}");
        }
        Err(e) => println!("Tracking failed: {e}"),
    }
    Ok(())
}

/// Run the menu loop until the user picks "Exit".
pub async fn run_menu(tracker: &mut ActivityTracker) -> anyhow::Result<()> {
    let items = ["Add activity", "Show history", "Show statistics", "Exit"];
    loop {
        println!();
        let selection = Select::new()
            .with_prompt("Menu")
            .items(&items)
            .default(0)
            .interact()?;
        match selection {
            0 => add_activity(tracker).await?,
            1 => print!("{}", render_history(tracker.history())),
            2 => print!("{}", render_stats(&tracker.stats())),
            _ => {
                println!("Bye.");
                break;
            }
        }
    }
    Ok(())
}
