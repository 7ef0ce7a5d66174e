//! Platform-specific path utilities for git-actions.

use std::path::PathBuf;

use crate::error::{ActionsError, Result};

/// Get the configuration directory for git-actions.
///
/// - Linux: `~/.config/git-actions`
/// - macOS: `~/Library/Application Support/git-actions`
/// - Windows: `%APPDATA%\git-actions`
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| ActionsError::Config("Cannot determine config directory".to_string()))?;
    Ok(base.join("git-actions"))
}

/// Get the main configuration file path.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
