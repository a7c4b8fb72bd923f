//! Per-repository result rows and the shared store that collects them

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

use crate::git::RepoStatus;

/// One summary row per discovered repository
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryRecord {
    /// Repository root, the directory that contains `.git`
    pub path: PathBuf,
    /// Primary remote URL, empty when probing failed
    pub remote: String,
    pub status: RepoStatus,
    /// Why the pull failed, if it did
    pub detail: Option<String>,
}

impl RepositoryRecord {
    pub fn new(path: impl Into<PathBuf>, remote: impl Into<String>, status: RepoStatus) -> Self {
        Self {
            path: path.into(),
            remote: remote.into(),
            status,
            detail: None,
        }
    }
}

#[derive(Default)]
struct Records {
    rows: Vec<RepositoryRecord>,
    index: HashMap<PathBuf, usize>,
}

/// Thread-safe, insertion-ordered collection of records keyed by path
///
/// Cloning the store clones the handle, not the records.
#[derive(Clone, Default)]
pub struct RecordStore {
    inner: Arc<Mutex<Records>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Records> {
        // A panicking task cannot leave the rows half-written, so poisoning is ignored
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adds a record. Returns false and keeps the existing row if the path is already present.
    pub fn append(&self, record: RepositoryRecord) -> bool {
        let mut records = self.lock();
        if records.index.contains_key(&record.path) {
            warn!(
                "Ignoring duplicate record for repository: {}",
                record.path.display()
            );
            return false;
        }
        let position = records.rows.len();
        records.index.insert(record.path.clone(), position);
        records.rows.push(record);
        true
    }

    /// Overwrites status and detail of the record at `path`. No-op if there is none.
    pub fn update_status(&self, path: &Path, status: RepoStatus, detail: Option<String>) {
        let mut records = self.lock();
        let position = records.index.get(path).copied();
        if let Some(position) = position {
            let row = &mut records.rows[position];
            row.status = status;
            row.detail = detail;
        }
    }

    /// Returns the record at `path`, if any
    pub fn get(&self, path: &Path) -> Option<RepositoryRecord> {
        let records = self.lock();
        records
            .index
            .get(path)
            .map(|&position| records.rows[position].clone())
    }

    /// Copies all records in insertion order
    pub fn snapshot(&self) -> Vec<RepositoryRecord> {
        self.lock().rows.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
