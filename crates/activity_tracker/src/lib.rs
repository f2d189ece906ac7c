//! Activity tracking core: merges remote calorie and exercise lookups into
//! durable records, keeps them in an append-only JSON log and derives
//! statistics from it.

pub mod cli;
pub mod error;
pub mod fetcher;
pub mod record;
pub mod stats;
pub mod store;
pub mod test_utils;
pub mod tracker;
pub mod translate;

pub use error::{TrackerError, TrackerResult};
pub use fetcher::{Fetched, TrackRequest, fetch_both};
pub use record::ActivityRecord;
pub use stats::{Stats, compute_stats};
pub use store::ActivityLogStore;
pub use tracker::ActivityTracker;
