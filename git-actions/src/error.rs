//! Error types and result aliases for git-actions.
//!
//! This module provides the crate-wide error type:
//! - Git process failures, wrapped from [`GitError`]
//! - Configuration read/write failures
//! - Helper methods for error classification
//! - Automatic conversion from common error types

use thiserror::Error;

use crate::git::GitError;

/// Main error type for git-actions operations.
#[derive(Error, Debug)]
pub enum ActionsError {
    /// Git process error (launch failure or non-zero exit).
    #[error(transparent)]
    Git(#[from] GitError),

    /// General configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}. Check file permissions and format.")]
    ConfigRead(String),

    /// Failed to write configuration file.
    #[error("Failed to write configuration file: {0}. Check directory permissions.")]
    ConfigWrite(String),

    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ActionsError {
    /// Returns the underlying git error, if this is one.
    #[must_use]
    pub const fn as_git(&self) -> Option<&GitError> {
        match self {
            Self::Git(err) => Some(err),
            _ => None,
        }
    }

    /// Checks if git itself rejected the operation (non-zero exit).
    ///
    /// Use this to tell "the command ran and said no" apart from
    /// launch failures and configuration problems.
    #[must_use]
    pub const fn is_command_failed(&self) -> bool {
        matches!(self, Self::Git(err) if err.is_command_failed())
    }

    /// Checks if the git binary could not be started.
    #[must_use]
    pub const fn is_launch_failure(&self) -> bool {
        matches!(self, Self::Git(err) if err.is_launch_failure())
    }
}

/// Result type alias using [`ActionsError`].
pub type Result<T> = std::result::Result<T, ActionsError>;

impl From<toml::de::Error> for ActionsError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigRead(format!("TOML parse error: {err}"))
    }
}

impl From<toml::ser::Error> for ActionsError {
    fn from(err: toml::ser::Error) -> Self {
        Self::ConfigWrite(format!("TOML serialize error: {err}"))
    }
}
