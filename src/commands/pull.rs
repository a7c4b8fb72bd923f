//! Repository pull command implementation
//!
//! This module drives a whole run: the tree walk streams repository roots
//! to a dispatcher, which starts one task per repository. Each task probes
//! the remote, records the row, pulls, and records the outcome. The command
//! waits for every task before rendering the summary.

use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::instrument::WithSubscriber;
use tracing::{error, info, info_span, warn, Dispatch, Instrument};

use crate::core::config::{DONE_TITLE, NO_REPOS_MESSAGE, RUNNING_TITLE};
use crate::core::{print_summary, RepoWalker, RepositoryRecord, SyncContext, SyncOptions};
use crate::git::{probe_remote, pull_repository, RepoStatus};
use crate::utils::{set_terminal_title, set_terminal_title_and_flush};

/// Handles the pull command: scan, pull everything, print the table
///
/// Individual repository failures never turn into an error here; they end
/// up in the table. Only an unusable root directory does.
pub async fn handle_pull_command(options: SyncOptions, dispatch: Dispatch) -> Result<()> {
    validate_root(&options.root)?;

    // Set terminal title to indicate gitpull is running
    set_terminal_title(RUNNING_TITLE);

    let context = SyncContext::new(options, dispatch);
    let records = sync_tree(&context).await;
    print_summary(&records, context.options.show_details);

    // Set terminal title to green checkbox to indicate completion
    set_terminal_title_and_flush(DONE_TITLE);

    Ok(())
}

fn validate_root(root: &Path) -> Result<()> {
    let metadata = std::fs::metadata(root)
        .with_context(|| format!("Cannot access directory {}", root.display()))?;
    if !metadata.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }
    Ok(())
}

/// Discovers and pulls every repository under the configured root
///
/// Returns the final records once all repository tasks have finished.
pub async fn sync_tree(context: &SyncContext) -> Vec<RepositoryRecord> {
    run_sync(context)
        .with_subscriber(context.dispatch.clone())
        .await
}

async fn run_sync(context: &SyncContext) -> Vec<RepositoryRecord> {
    let (repo_tx, mut repo_rx) = mpsc::unbounded_channel::<PathBuf>();

    // The walk is blocking filesystem work, keep it off the async workers
    let walk_root = context.options.root.clone();
    let walk_options = context.options.walk.clone();
    let walk_dispatch = context.dispatch.clone();
    let walker = tokio::task::spawn_blocking(move || {
        tracing::dispatcher::with_default(&walk_dispatch, || {
            for repo_path in RepoWalker::new(&walk_root, walk_options) {
                if repo_tx.send(repo_path).is_err() {
                    break;
                }
            }
        })
    });

    // Start each repository as soon as the walker reports it
    let mut tasks = FuturesUnordered::new();
    while let Some(repo_path) = repo_rx.recv().await {
        tasks.push(spawn_repository_task(context.clone(), repo_path));
    }

    if let Err(e) = walker.await {
        error!("Error in repository discovery: {e}");
    }

    if tasks.is_empty() {
        info!("{NO_REPOS_MESSAGE} in {}", context.options.root.display());
    } else {
        info!("Waiting for {} repositories to finish", tasks.len());
    }

    // Join barrier
    while let Some(result) = tasks.next().await {
        if let Err(e) = result {
            error!("Repository task did not complete: {e}");
        }
    }

    let records = context.records.snapshot();
    log_outcome(&records);
    records
}

fn spawn_repository_task(context: SyncContext, repo_path: PathBuf) -> JoinHandle<()> {
    let dispatch = context.dispatch.clone();
    tokio::spawn(
        async move {
            let span = info_span!("repo", path = %repo_path.display());
            sync_repository(&context, &repo_path).instrument(span).await;
        }
        .with_subscriber(dispatch),
    )
}

/// Probes, records, pulls and records the outcome for one repository
pub async fn sync_repository(context: &SyncContext, repo_path: &Path) {
    let _permit = match context.semaphore.acquire().await {
        Ok(permit) => permit,
        Err(e) => {
            error!("Failed to acquire permit for {}: {e}", repo_path.display());
            let mut record = RepositoryRecord::new(repo_path, "", RepoStatus::Failed);
            record.detail = Some(format!("semaphore error: {e}"));
            context.records.append(record);
            return;
        }
    };

    let timeout = context.options.timeout;

    let probe = probe_remote(repo_path, timeout).await;
    if !context
        .records
        .append(RepositoryRecord::new(repo_path, probe.remote, probe.status))
    {
        // Another task already owns this repository
        return;
    }

    let outcome = pull_repository(repo_path, timeout).await;
    context
        .records
        .update_status(repo_path, outcome.status, outcome.detail);
}

fn log_outcome(records: &[RepositoryRecord]) {
    let succeeded = records
        .iter()
        .filter(|r| r.status == RepoStatus::Success)
        .count();
    let failed = records
        .iter()
        .filter(|r| r.status == RepoStatus::Failed)
        .count();
    info!(
        "Pulled {} repositories: {succeeded} succeeded, {failed} failed",
        records.len()
    );

    let unfinished = records.iter().filter(|r| !r.status.is_final()).count();
    if unfinished > 0 {
        warn!("{unfinished} repositories never finished pulling");
    }
}
