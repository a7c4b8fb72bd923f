//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod git;

pub use self::fixtures::TestWorkspace;
pub use self::git::{create_test_commit, head_commit, is_git_available, setup_git_repo};
