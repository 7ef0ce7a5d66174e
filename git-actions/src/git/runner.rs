//! Git process runner.
//!
//! This module owns the process boundary:
//! - [`CommandRunner`] - Trait with the two result shapes callers need
//! - [`GitRunner`] - Implementation that spawns the git binary and blocks until it exits

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::{debug, trace};

use crate::config::GitSettings;
use crate::error::Result;
use crate::git::error::GitError;

/// Runs git with an argument vector (enables mocking in tests).
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Runs git and returns stdout followed by stderr as one buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be launched or exits non-zero. On a
    /// non-zero exit the same combined text is carried in
    /// [`GitError::CommandFailed`].
    fn run_combined(&self, args: &[String]) -> Result<Vec<u8>>;

    /// Runs git and returns stdout only.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be launched or exits non-zero. On a
    /// non-zero exit git's stderr is carried in [`GitError::CommandFailed`].
    fn run_captured(&self, args: &[String]) -> Result<Vec<u8>>;
}

/// Spawns the git binary against an optional working directory.
///
/// Every invocation is a fresh child process; nothing is held between calls.
#[derive(Debug, Clone)]
pub struct GitRunner {
    program: String,
    working_dir: Option<PathBuf>,
    env: Vec<(String, String)>,
}

impl GitRunner {
    /// Creates a runner with default settings.
    ///
    /// An empty `working_dir` means the caller's current directory.
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self::with_settings(working_dir, &GitSettings::default())
    }

    /// Creates a runner from explicit settings.
    pub fn with_settings(working_dir: impl AsRef<Path>, settings: &GitSettings) -> Self {
        let dir = working_dir.as_ref();
        let working_dir = (!dir.as_os_str().is_empty()).then(|| dir.to_path_buf());

        let mut env = Vec::new();
        if settings.disable_prompts {
            env.push(("GIT_TERMINAL_PROMPT".to_string(), "0".to_string()));
        }
        if settings.c_locale {
            env.push(("LC_ALL".to_string(), "C".to_string()));
        }
        env.extend(settings.env.iter().map(|(k, v)| (k.clone(), v.clone())));

        Self {
            program: settings.program.clone(),
            working_dir,
            env,
        }
    }

    /// Directory git runs in, or `None` for the current directory.
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Program that is launched.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .envs(self.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn command_line(&self, args: &[String]) -> String {
        if args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, args.join(" "))
        }
    }

    /// Spawns the child and waits for it, mapping launch failures.
    fn execute(&self, args: &[String]) -> Result<(Output, String)> {
        let command = self.command_line(args);
        debug!(command = %command, dir = ?self.working_dir, "Running git command");

        let output = self.command(args).output().map_err(|source| {
            // A missing working directory also surfaces as NotFound.
            let dir_missing = self.working_dir.as_ref().is_some_and(|dir| !dir.is_dir());
            if source.kind() == std::io::ErrorKind::NotFound && !dir_missing {
                GitError::GitNotFound {
                    program: self.program.clone(),
                }
            } else {
                GitError::Spawn {
                    command: command.clone(),
                    source,
                }
            }
        })?;

        trace!(command = %command, code = ?output.status.code(), "Git command exited");
        Ok((output, command))
    }
}

impl Default for GitRunner {
    fn default() -> Self {
        Self::new("")
    }
}

impl CommandRunner for GitRunner {
    fn run_combined(&self, args: &[String]) -> Result<Vec<u8>> {
        let (output, command) = self.execute(args)?;

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);

        if output.status.success() {
            Ok(combined)
        } else {
            Err(GitError::CommandFailed {
                command,
                code: output.status.code().unwrap_or(-1),
                output: String::from_utf8_lossy(&combined).into_owned(),
            }
            .into())
        }
    }

    fn run_captured(&self, args: &[String]) -> Result<Vec<u8>> {
        let (output, command) = self.execute(args)?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(GitError::CommandFailed {
                command,
                code: output.status.code().unwrap_or(-1),
                output: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into())
        }
    }
}
