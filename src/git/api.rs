//! Public API for git operations.
//!
//! This module provides the stable public API for git-related functionality:
//! - Running git subprocesses scoped to a repository
//! - Probing the primary remote of a repository
//! - Pulling a repository once and reporting the outcome
//!
//! ## Example: Probing a remote
//!
//! ```rust,no_run
//! use gitpull::git::probe_remote;
//! use std::path::Path;
//!
//! async fn show(path: &Path) {
//!     let probe = probe_remote(path, None).await;
//!     println!("{} -> {}", path.display(), probe.remote);
//! }
//! ```

// Subprocess execution
pub use super::operations::run_git;

// Remote probing
pub use super::operations::{parse_remote_listing, probe_remote, RemoteProbe};

// Pulling
pub use super::operations::{pull_repository, PullOutcome};

// Status
pub use super::status::RepoStatus;
