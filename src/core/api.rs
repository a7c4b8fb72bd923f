//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Repository discovery
//! - Run options and the shared sync context
//! - The thread-safe record store
//! - Summary rendering
//! - Logger configuration
//!
//! Internal implementation details are not exposed through this API.

// Core types
pub use super::context::{SyncContext, SyncOptions};
pub use super::records::{RecordStore, RepositoryRecord};

// Discovery
pub use super::discovery::{find_repos_from_path, RepoWalker, WalkOptions};

// Reporting
pub use super::report::{print_summary, render_summary};

// Logging
pub use super::logging::{build_dispatch, InvalidLogLevel, LogLevel};

// Configuration
pub use super::config::{get_git_concurrency, DEFAULT_LOG_LEVEL, GIT_CONCURRENT_CAP};
