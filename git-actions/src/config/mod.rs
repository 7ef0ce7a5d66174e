//! Settings that shape how git is launched.
//!
//! The file lives at [`config_file`] and is optional: a missing file means
//! plain `git`, remote `origin`, prompts disabled.

pub mod paths;
pub mod settings;

pub use paths::config_file;
pub use settings::{ActionsConfig, GitSettings};

use std::path::Path;

use crate::error::Result;

/// Reads the user's config file, then applies `GIT_ACTIONS_*` overrides.
pub fn load_config() -> Result<ActionsConfig> {
    let path = config_file()?;
    load_config_from(&path)
}

/// Reads `path` as TOML, falling back to defaults when it is absent.
///
/// Environment overrides win over both the file and the defaults.
pub fn load_config_from(path: &Path) -> Result<ActionsConfig> {
    if !path.exists() {
        return Ok(ActionsConfig::default().with_env_overrides());
    }

    let contents = std::fs::read_to_string(path)?;
    let config: ActionsConfig = toml::from_str(&contents)?;

    Ok(config.with_env_overrides())
}

/// Writes `config` to the user's config file.
pub fn save_config(config: &ActionsConfig) -> Result<()> {
    let path = config_file()?;
    save_config_to(config, &path)
}

/// Writes `config` to `path` as pretty TOML, creating missing parent directories.
pub fn save_config_to(config: &ActionsConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}
