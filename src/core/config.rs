//! Configuration constants and settings

// Concurrency Configuration
//
// Each repository costs two git subprocesses and mostly waits on the network,
// so the default runs a few more repositories than there are cores.

// Upper bound for the default concurrency
pub const GIT_CONCURRENT_CAP: usize = 12;

/// Determines the concurrency limit for git operations based on CLI args and system resources
///
/// Priority order:
/// 1. --sequential flag → 1
/// 2. --jobs N flag → N
/// 3. Smart default → min(CPU_CORES + 2, 12)
pub fn get_git_concurrency(jobs: Option<usize>, sequential: bool) -> usize {
    if sequential {
        return 1;
    }

    if let Some(n) = jobs {
        return n.max(1); // Ensure at least 1
    }

    (num_cpus::get() + 2).min(GIT_CONCURRENT_CAP)
}

// Repository discovery configuration
pub const GIT_METADATA_DIR: &str = ".git";

// Logging configuration
pub const DEFAULT_LOG_LEVEL: &str = "error";

// Summary table headers
pub const TABLE_HEADERS: [&str; 3] = ["Directory", "Remote", "Status"];
pub const DETAIL_HEADER: &str = "Detail";

// Display formatting constants
pub const ERROR_MESSAGE_MAX_LENGTH: usize = 60;
pub const ERROR_MESSAGE_TRUNCATE_LENGTH: usize = 57;

// UI Constants
pub const NO_REPOS_MESSAGE: &str = "No git repositories found";
pub const RUNNING_TITLE: &str = "🚀 gitpull";
pub const DONE_TITLE: &str = "✅ gitpull";
