//! Git-specific error types.
//!
//! This module defines error types for git subprocess invocations:
//! - [`GitError`] - Launch failures and non-zero exits, with git's own diagnostics

use thiserror::Error;

/// Markers git prints when an operation stops on conflicting changes.
const CONFLICT_MARKERS: [&str; 4] = [
    "CONFLICT (",
    "Merge conflict in",
    "Resolve all conflicts",
    "could not apply",
];

/// Errors raised while running the git binary.
#[derive(Error, Debug)]
pub enum GitError {
    /// The git binary was not found on `$PATH`.
    #[error("'{program}' executable not found. Is git installed?")]
    GitNotFound {
        /// Program name or path that failed to resolve.
        program: String,
    },

    /// The process could not be spawned (e.g., permission denied, bad working directory).
    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        /// Command line that was being launched.
        command: String,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// Git ran and exited with a non-zero status.
    ///
    /// `output` holds trimmed stderr for captured invocations and the full,
    /// untrimmed stdout+stderr text for combined invocations.
    #[error("'{command}' failed (exit code {code}): {output}")]
    CommandFailed {
        /// Command line that failed.
        command: String,
        /// Exit code, or -1 when terminated by a signal.
        code: i32,
        /// Git's diagnostic text.
        output: String,
    },
}

impl GitError {
    /// Checks if the process never started.
    #[must_use]
    pub const fn is_launch_failure(&self) -> bool {
        matches!(self, Self::GitNotFound { .. } | Self::Spawn { .. })
    }

    /// Checks if git ran and rejected the operation.
    #[must_use]
    pub const fn is_command_failed(&self) -> bool {
        matches!(self, Self::CommandFailed { .. })
    }

    /// Checks if the failure was caused by conflicts (merge, rebase, stash apply).
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.output().is_some_and(|output| {
            CONFLICT_MARKERS
                .iter()
                .any(|marker| output.contains(marker))
        })
    }

    /// Git's diagnostic text for a non-zero exit.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}
