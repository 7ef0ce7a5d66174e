//! git-actions - a blocking façade over the git command line.
//!
//! Every operation launches `git` with a fixed argument vector, waits for it
//! to exit, and turns its output into a typed result or an [`ActionsError`].
//!
//! ```no_run
//! use git_actions::GitClient;
//!
//! let client = GitClient::new("/path/to/repo");
//! client.add("src/lib.rs")?;
//! client.commit("Fix parser")?;
//! if client.has_commits_to_push()? {
//!     println!("ahead of upstream");
//! }
//! # Ok::<(), git_actions::ActionsError>(())
//! ```

pub mod config;
pub mod error;
pub mod git;

pub use config::{ActionsConfig, GitSettings};
pub use error::{ActionsError, Result};
pub use git::shortcuts;
pub use git::{stash_ref, CommandRunner, GitClient, GitError, GitRunner, StashEntry};
