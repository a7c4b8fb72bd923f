//! Basic git operations and command execution

use anyhow::Result;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, error, info};

use super::status::RepoStatus;
use crate::utils::clean_error_message;

// Git command arguments
const GIT_REMOTE_VERBOSE_ARGS: &[&str] = &["remote", "-v"];
const GIT_PULL_ARGS: &[&str] = &["pull"];

// Fields of a `git remote -v` line: name, URL, direction tag
const REMOTE_LINE_FIELDS: usize = 3;

/// Runs `git -C <path> <args>` with an optional timeout
/// Returns (success, stdout, stderr)
pub async fn run_git(
    path: &Path,
    args: &[&str],
    timeout: Option<Duration>,
) -> Result<(bool, String, String)> {
    let mut command = Command::new("git");
    command
        .arg("-C")
        .arg(path)
        .args(args)
        // Concurrent pulls cannot share the terminal for credential prompts
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let output = match timeout {
        Some(limit) => match tokio::time::timeout(limit, command.output()).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(anyhow::anyhow!(
                    "git {} timed out after {} seconds",
                    args.join(" "),
                    limit.as_secs()
                ))
            }
        },
        None => command.output().await?,
    };

    Ok((
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).trim().to_string(),
        String::from_utf8_lossy(&output.stderr).trim().to_string(),
    ))
}

/// Remote URL and initial status determined for a repository
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteProbe {
    pub remote: String,
    pub status: RepoStatus,
}

impl RemoteProbe {
    fn unknown() -> Self {
        Self {
            remote: String::new(),
            status: RepoStatus::Unknown,
        }
    }
}

/// Extracts the remote URL from `git remote -v` output
///
/// Only the first line is considered. It must have exactly three
/// whitespace-separated fields (`origin <url> (fetch)`); the URL is the second.
pub fn parse_remote_listing(output: &str) -> Option<String> {
    let first_line = output.lines().next()?.trim();
    let fields: Vec<&str> = first_line.split_whitespace().collect();
    if fields.len() != REMOTE_LINE_FIELDS {
        return None;
    }
    Some(fields[1].to_string())
}

/// Determines the primary remote of a repository
///
/// Never fails: any problem is logged and reported as an empty remote
/// with `RepoStatus::Unknown`.
pub async fn probe_remote(path: &Path, timeout: Option<Duration>) -> RemoteProbe {
    let stdout = match run_git(path, GIT_REMOTE_VERBOSE_ARGS, timeout).await {
        Ok((true, stdout, _)) => stdout,
        Ok((false, _, stderr)) => {
            error!(
                "Error executing git remote for {}: {}",
                path.display(),
                clean_error_message(&stderr)
            );
            return RemoteProbe::unknown();
        }
        Err(e) => {
            error!("Error executing git remote for {}: {e}", path.display());
            return RemoteProbe::unknown();
        }
    };

    match parse_remote_listing(&stdout) {
        Some(remote) => RemoteProbe {
            remote,
            status: RepoStatus::Pending,
        },
        None => {
            error!(
                "Unexpected git remote output for {}: {:?}",
                path.display(),
                stdout.lines().next().unwrap_or("")
            );
            RemoteProbe::unknown()
        }
    }
}

/// Outcome of a single pull attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PullOutcome {
    pub status: RepoStatus,
    /// Cleaned failure reason, `None` on success
    pub detail: Option<String>,
}

/// Runs `git pull` once for a repository
pub async fn pull_repository(path: &Path, timeout: Option<Duration>) -> PullOutcome {
    info!("Performing git pull for repository: {}", path.display());

    match run_git(path, GIT_PULL_ARGS, timeout).await {
        Ok((true, stdout, _)) => {
            debug!("git pull output for {}: {stdout}", path.display());
            PullOutcome {
                status: RepoStatus::Success,
                detail: None,
            }
        }
        Ok((false, _, stderr)) => {
            let detail = if stderr.is_empty() {
                "git pull exited with an error".to_string()
            } else {
                clean_error_message(&stderr)
            };
            error!("Error executing git pull for {}: {detail}", path.display());
            PullOutcome {
                status: RepoStatus::Failed,
                detail: Some(detail),
            }
        }
        Err(e) => {
            error!("Error executing git pull for {}: {e}", path.display());
            PullOutcome {
                status: RepoStatus::Failed,
                detail: Some(clean_error_message(&e.to_string())),
            }
        }
    }
}
