//! Repository discovery
//!
//! A repository root is any directory with a `.git` subdirectory. Once a
//! root is found the walker never descends into it, so nested repositories
//! and the metadata directory itself are never visited.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use walkdir::WalkDir;

use super::config::GIT_METADATA_DIR;

/// Knobs for the directory walk
#[derive(Clone, Debug, Default)]
pub struct WalkOptions {
    /// Maximum depth below the root to descend, unbounded if `None`
    pub max_depth: Option<usize>,
    /// Follow symbolic links to directories
    pub follow_links: bool,
    /// Directory names that are never entered (matched on the final component)
    pub exclude: Vec<String>,
}

impl WalkOptions {
    fn is_excluded(&self, name: &OsStr) -> bool {
        self.exclude.iter().any(|skip| OsStr::new(skip) == name)
    }
}

/// Lazy, single-pass iterator over the repository roots below a directory
pub struct RepoWalker {
    entries: walkdir::IntoIter,
    options: WalkOptions,
}

impl RepoWalker {
    pub fn new(root: impl AsRef<Path>, options: WalkOptions) -> Self {
        let mut walk = WalkDir::new(root).follow_links(options.follow_links);
        if let Some(depth) = options.max_depth {
            walk = walk.max_depth(depth);
        }
        Self {
            entries: walk.into_iter(),
            options,
        }
    }
}

impl Iterator for RepoWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    // One unreadable entry must not stop the scan
                    error!("Error accessing path: {e}");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            if entry.depth() > 0 && self.options.is_excluded(entry.file_name()) {
                debug!("Skipping excluded directory: {}", entry.path().display());
                self.entries.skip_current_dir();
                continue;
            }

            if entry.path().join(GIT_METADATA_DIR).is_dir() {
                self.entries.skip_current_dir();
                debug!("Found repository: {}", entry.path().display());
                return Some(entry.into_path());
            }
        }
    }
}

/// Collects every repository root below `search_path`, sorted by path
///
/// Convenience wrapper around [`RepoWalker`] for callers that want the whole
/// list up front rather than streaming it.
pub fn find_repos_from_path(search_path: impl AsRef<Path>, options: WalkOptions) -> Vec<PathBuf> {
    let mut repos: Vec<PathBuf> = RepoWalker::new(search_path, options).collect();
    repos.sort();
    repos
}
