//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git::{add_git_remote, clone_repo, create_test_commit, setup_git_repo};

/// A scratch directory holding upstream repositories and a tree of clones
///
/// Upstreams live under `upstreams/`, everything meant to be scanned lives
/// under `tree/`.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        std::fs::create_dir(temp_dir.path().join("upstreams"))?;
        std::fs::create_dir(temp_dir.path().join("tree"))?;
        Ok(Self { temp_dir })
    }

    /// Directory to hand to the scanner
    pub fn tree(&self) -> PathBuf {
        self.temp_dir.path().join("tree")
    }

    /// Creates an upstream repository with one commit
    pub fn upstream(&self, name: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join("upstreams").join(name);
        std::fs::create_dir_all(&path)?;
        setup_git_repo(&path)?;
        create_test_commit(&path, "README.md", &format!("# {name}"), "Initial commit")?;
        Ok(path)
    }

    /// Clones `upstream` to `relative` below the scanned tree
    pub fn clone_into_tree(&self, upstream: &Path, relative: &str) -> Result<PathBuf> {
        let dest = self.tree().join(relative);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        clone_repo(upstream, &dest)?;
        Ok(dest)
    }

    /// Creates a repository below the tree whose only remote points nowhere
    pub fn broken_repo(&self, relative: &str) -> Result<PathBuf> {
        let path = self.tree().join(relative);
        std::fs::create_dir_all(&path)?;
        setup_git_repo(&path)?;
        create_test_commit(&path, "README.md", "# broken", "Initial commit")?;
        let missing = self.temp_dir.path().join("does-not-exist");
        add_git_remote(&path, "origin", &missing.to_string_lossy())?;
        Ok(path)
    }

    /// Creates a repository below the tree with no remote at all
    pub fn local_only_repo(&self, relative: &str) -> Result<PathBuf> {
        let path = self.tree().join(relative);
        std::fs::create_dir_all(&path)?;
        setup_git_repo(&path)?;
        create_test_commit(&path, "README.md", "# local", "Initial commit")?;
        Ok(path)
    }
}
