//! # gitpull
//!
//! `gitpull` finds every git repository below a directory and pulls them all
//! concurrently. It powers the `gitpull` CLI tool.
//!
//! ## Core Features
//!
//! - **Pruned Discovery**: a repository root is reported once and never descended into.
//! - **Bounded Concurrency**: one task per repository, capped by a semaphore.
//! - **Failure Isolation**: a failing pull is recorded in its row and never stops the others.
//! - **Summary Table**: directory, remote and status for every repository found.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gitpull::core::{find_repos_from_path, WalkOptions};
//!
//! fn main() {
//!     for path in find_repos_from_path(".", WalkOptions::default()) {
//!         println!("{}", path.display());
//!     }
//! }
//! ```

pub mod commands;
pub mod core;
pub mod git;
pub mod utils;
