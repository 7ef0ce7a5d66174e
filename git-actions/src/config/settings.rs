//! Application configuration settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Main configuration for git-actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    /// Git subprocess settings.
    pub git: GitSettings,
}

/// How the git binary is launched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitSettings {
    /// Program name (resolved on `$PATH`) or absolute path to git.
    pub program: String,
    /// Remote used by remote-tracking comparisons.
    pub remote: String,
    /// Set `GIT_TERMINAL_PROMPT=0` so credential prompts fail instead of blocking.
    pub disable_prompts: bool,
    /// Set `LC_ALL=C` for untranslated diagnostics.
    pub c_locale: bool,
    /// Extra environment variables passed to every invocation.
    pub env: BTreeMap<String, String>,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            remote: "origin".to_string(),
            disable_prompts: true,
            c_locale: false,
            env: BTreeMap::new(),
        }
    }
}

/// Environment variables that can override configuration.
pub mod env {
    pub const PROGRAM: &str = "GIT_ACTIONS_PROGRAM";
    pub const REMOTE: &str = "GIT_ACTIONS_REMOTE";
}

impl ActionsConfig {
    /// Apply environment variable overrides to the configuration.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(program) = std::env::var(env::PROGRAM) {
            if !program.trim().is_empty() {
                self.git.program = program;
            }
        }

        if let Ok(remote) = std::env::var(env::REMOTE) {
            if !remote.trim().is_empty() {
                self.git.remote = remote;
            }
        }

        self
    }
}
