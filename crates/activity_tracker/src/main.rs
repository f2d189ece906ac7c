use std::sync::Arc;

use activity_tracker::{ActivityLogStore, ActivityTracker, cli};
use anyhow::Context;
use ninjas_client::config::Config;
use ninjas_client::http_client::ReqwestNinjasClient;

const DEFAULT_HISTORY_FILE: &str = "activity_history.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure logging from env var `ACTIVITY_TRACKER_LOG_LEVEL` (or fallback to `RUST_LOG`, default `warn`).
    let log_env = std::env::var("ACTIVITY_TRACKER_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!("activity_tracker: log filter: {}", log_env);

    let config = Config::from_env().context("loading API configuration")?;
    let client = ReqwestNinjasClient::from_config(&config).context("building HTTP client")?;

    let history_path = std::env::var("ACTIVITY_HISTORY_FILE")
        .unwrap_or_else(|_| DEFAULT_HISTORY_FILE.to_string());
    let store = ActivityLogStore::load(&history_path)
        .await
        .with_context(|| format!("loading activity history from {history_path}"))?;
    tracing::info!(
        "activity_tracker: {} activities loaded from {}",
        store.len(),
        history_path
    );

    let mut tracker = ActivityTracker::new(Arc::new(client), store);
    cli::run_menu(&mut tracker).await
}
