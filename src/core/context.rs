//! Options and shared state handed to every stage of a run

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::Dispatch;

use super::discovery::WalkOptions;
use super::records::RecordStore;

/// Everything the user can configure about one run
#[derive(Clone, Debug)]
pub struct SyncOptions {
    /// Directory to scan for repositories
    pub root: PathBuf,
    /// Maximum number of repositories processed at once
    pub concurrency: usize,
    /// Per git command timeout, none by default
    pub timeout: Option<Duration>,
    /// Show the failure detail column in the summary
    pub show_details: bool,
    pub walk: WalkOptions,
}

impl SyncOptions {
    pub fn new(root: impl Into<PathBuf>, concurrency: usize) -> Self {
        Self {
            root: root.into(),
            concurrency: concurrency.max(1),
            timeout: None,
            show_details: false,
            walk: WalkOptions::default(),
        }
    }
}

/// Processing context that encapsulates all parameters needed for repository processing
///
/// Replaces process-wide singletons: the logger and the record store are
/// reached through this value only. Cloning is cheap and shares the state.
#[derive(Clone)]
pub struct SyncContext {
    /// Logger attached to the walker thread and to every repository task
    pub dispatch: Dispatch,
    /// Thread-safe collection of per-repository results
    pub records: RecordStore,
    /// Semaphore for controlling concurrent operations
    pub semaphore: Arc<Semaphore>,
    pub options: Arc<SyncOptions>,
}

impl SyncContext {
    pub fn new(options: SyncOptions, dispatch: Dispatch) -> Self {
        let semaphore = Arc::new(Semaphore::new(options.concurrency.max(1)));
        Self {
            dispatch,
            records: RecordStore::new(),
            semaphore,
            options: Arc::new(options),
        }
    }
}
