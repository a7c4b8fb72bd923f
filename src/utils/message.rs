//! Condensing git error output into one table-friendly line

use crate::core::config::{ERROR_MESSAGE_MAX_LENGTH, ERROR_MESSAGE_TRUNCATE_LENGTH};

/// Cleans and formats error messages for display
pub fn clean_error_message(error: &str) -> String {
    // Collapse newlines, tabs and runs of spaces
    let cleaned = error.split_whitespace().collect::<Vec<_>>().join(" ");
    let lower = cleaned.to_lowercase();

    // Extract key error patterns
    if lower.contains("timed out") {
        "timeout".to_string()
    } else if lower.contains("not a git repository") {
        "not a git repository".to_string()
    } else if lower.contains("no tracking information") {
        "no upstream branch".to_string()
    } else if lower.contains("would be overwritten") {
        "local changes would be overwritten".to_string()
    } else if lower.contains("conflict") {
        "merge conflict".to_string()
    } else if lower.contains("divergent") || lower.contains("diverged") {
        "diverged from upstream".to_string()
    } else if lower.contains("authentication") || lower.contains("permission denied") {
        "authentication failed".to_string()
    } else if lower.contains("could not read from remote")
        || lower.contains("does not appear to be a git repository")
    {
        "remote unreachable".to_string()
    } else if lower.contains("connection") || lower.contains("network") {
        "network error".to_string()
    } else if cleaned.chars().count() > ERROR_MESSAGE_MAX_LENGTH {
        let truncated: String = cleaned.chars().take(ERROR_MESSAGE_TRUNCATE_LENGTH).collect();
        format!("{truncated}...")
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_error_message("fatal:\n  bad\t\tthing\r\n"), "fatal: bad thing");
    }

    #[test]
    fn test_recognizes_common_pull_failures() {
        assert_eq!(
            clean_error_message("fatal: not a git repository (or any of the parent directories): .git"),
            "not a git repository"
        );
        assert_eq!(
            clean_error_message(
                "There is no tracking information for the current branch.\nPlease specify which branch you want to merge with."
            ),
            "no upstream branch"
        );
        assert_eq!(
            clean_error_message(
                "fatal: '/tmp/gone' does not appear to be a git repository\nfatal: Could not read from remote repository."
            ),
            "remote unreachable"
        );
        assert_eq!(
            clean_error_message("CONFLICT (content): Merge conflict in f.txt"),
            "merge conflict"
        );
        assert_eq!(
            clean_error_message("hint: You have divergent branches and need to specify how to reconcile them."),
            "diverged from upstream"
        );
        assert_eq!(
            clean_error_message("git pull timed out after 30 seconds"),
            "timeout"
        );
    }

    #[test]
    fn test_truncates_long_unrecognized_messages() {
        let long = "x".repeat(ERROR_MESSAGE_MAX_LENGTH + 20);
        let cleaned = clean_error_message(&long);
        assert!(cleaned.ends_with("..."));
        assert_eq!(cleaned.chars().count(), ERROR_MESSAGE_TRUNCATE_LENGTH + 3);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let long = "é".repeat(ERROR_MESSAGE_MAX_LENGTH + 5);
        let cleaned = clean_error_message(&long);
        assert!(cleaned.starts_with('é'));
        assert!(cleaned.ends_with("..."));
    }
}
