//! Durable append-only activity log backed by a single JSON file.
//!
//! The whole log is read once on [`ActivityLogStore::load`] and rewritten in
//! full on every [`ActivityLogStore::append`]. Writes go to a sibling
//! temporary file which is then renamed over the log, and the in-memory copy
//! only grows after the rename succeeded, so a failed save never leaves
//! memory ahead of disk.

use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};
use crate::record::ActivityRecord;

#[derive(Debug)]
pub struct ActivityLogStore {
    path: PathBuf,
    records: Vec<ActivityRecord>,
}

impl ActivityLogStore {
    /// Read the persisted log at `path`. A missing file is an empty history.
    pub async fn load(path: impl Into<PathBuf>) -> TrackerResult<Self> {
        let path = path.into();
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Vec<ActivityRecord>>(&bytes).map_err(|e| {
                TrackerError::Corrupt {
                    path: path.clone(),
                    source: e,
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(TrackerError::Read { path, source: e }),
        };
        tracing::debug!(path = %path.display(), count = records.len(), "activity log loaded");
        Ok(Self { path, records })
    }

    /// Persist the log with `record` appended, then commit it to memory.
    ///
    /// On error the record is neither on disk nor in memory.
    pub async fn append(&mut self, record: ActivityRecord) -> TrackerResult<()> {
        let snapshot: Vec<&ActivityRecord> = self
            .records
            .iter()
            .chain(std::iter::once(&record))
            .collect();
        let body = serde_json::to_vec_pretty(&snapshot)?;
        self.write_atomically(&body).await?;
        tracing::info!(
            path = %self.path.display(),
            count = self.records.len() + 1,
            "activity appended"
        );
        self.records.push(record);
        Ok(())
    }

    async fn write_atomically(&self, body: &[u8]) -> TrackerResult<()> {
        let tmp = temp_path(&self.path);
        let persist_err = |source| TrackerError::Persistence {
            path: self.path.clone(),
            source,
        };
        if let Err(e) = tokio::fs::write(&tmp, body).await {
            return Err(persist_err(e));
        }
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(persist_err(e));
        }
        Ok(())
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "activity_history.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
