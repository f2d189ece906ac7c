use std::sync::Arc;

use chrono::Local;
use ninjas_client::NinjasClient;

use crate::error::TrackerResult;
use crate::fetcher::{TrackRequest, fetch_both};
use crate::record::ActivityRecord;
use crate::stats::{Stats, compute_stats};
use crate::store::ActivityLogStore;

/// Owns the activity log and the remote client for one process.
///
/// `track` takes `&mut self`, so appends to the log are never interleaved.
pub struct ActivityTracker {
    client: Arc<dyn NinjasClient>,
    store: ActivityLogStore,
}

impl ActivityTracker {
    pub fn new(client: Arc<dyn NinjasClient>, store: ActivityLogStore) -> Self {
        Self { client, store }
    }

    /// Look up `request`, build a record and append it to the log.
    pub async fn track(&mut self, request: TrackRequest) -> TrackerResult<ActivityRecord> {
        let fetched = fetch_both(self.client.as_ref(), &request).await;
        let record = ActivityRecord::compose(
            fetched.calories,
            fetched.exercise,
            request.weight,
            Local::now().naive_local(),
        )?;
        self.store.append(record.clone()).await?;
        Ok(record)
    }

    pub fn history(&self) -> &[ActivityRecord] {
        self.store.records()
    }

    pub fn stats(&self) -> Stats {
        compute_stats(self.store.records())
    }

    pub fn store(&self) -> &ActivityLogStore {
        &self.store
    }
}
