//! Git operations module for git-actions.
//!
//! Runs the git binary as a subprocess and interprets its output:
//! - Process runner with combined and captured result shapes
//! - Stage, commit, merge, rebase and stash operations
//! - Conflict listing and ahead/behind checks

pub mod error;
pub mod operations;
pub mod runner;
pub mod shortcuts;
pub mod types;

pub use error::GitError;
pub use operations::GitClient;
pub use runner::{CommandRunner, GitRunner};
pub use types::{parse_stash_list, stash_ref, StashEntry, DEFAULT_STASH_REF};
