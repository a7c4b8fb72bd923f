//! Repository status enumeration and utilities

use std::fmt;

/// Status of a single repository over the course of one run
///
/// `Pending` and `Unknown` are assigned when the remote is probed.
/// They are replaced exactly once by `Success` or `Failed` after the pull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepoStatus {
    /// Remote probed successfully, pull not finished yet
    Pending,
    /// Remote could not be determined, pull not finished yet
    Unknown,
    /// `git pull` exited successfully
    Success,
    /// `git pull` failed, timed out or could not be started
    Failed,
}

impl RepoStatus {
    /// Returns the text shown in the summary table
    pub fn text(&self) -> &str {
        match self {
            RepoStatus::Pending => "Pending",
            RepoStatus::Unknown => "Unknown",
            RepoStatus::Success => "Success",
            RepoStatus::Failed => "Failed",
        }
    }

    /// Whether the pull has finished, one way or the other
    pub fn is_final(&self) -> bool {
        matches!(self, RepoStatus::Success | RepoStatus::Failed)
    }
}

impl fmt::Display for RepoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_matches_table_labels() {
        assert_eq!(RepoStatus::Pending.to_string(), "Pending");
        assert_eq!(RepoStatus::Unknown.to_string(), "Unknown");
        assert_eq!(RepoStatus::Success.to_string(), "Success");
        assert_eq!(RepoStatus::Failed.to_string(), "Failed");
    }

    #[test]
    fn test_only_pull_outcomes_are_final() {
        assert!(!RepoStatus::Pending.is_final());
        assert!(!RepoStatus::Unknown.is_final());
        assert!(RepoStatus::Success.is_final());
        assert!(RepoStatus::Failed.is_final());
    }
}
