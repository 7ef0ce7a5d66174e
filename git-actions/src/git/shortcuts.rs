//! Free-function shortcuts for the current directory.
//!
//! Each function builds a fresh [`GitClient::default`] and delegates to it,
//! so there is no process-wide client to share or mutate.

use crate::error::Result;
use crate::git::operations::GitClient;

pub fn add(file: &str) -> Result<()> {
    GitClient::default().add(file)
}

pub fn reset(file: &str) -> Result<()> {
    GitClient::default().reset(file)
}

pub fn commit(message: &str) -> Result<()> {
    GitClient::default().commit(message)
}

pub fn merge(branch: &str) -> Result<()> {
    GitClient::default().merge(branch)
}

pub fn merge_continue() -> Result<()> {
    GitClient::default().merge_continue()
}

pub fn merge_abort() -> Result<()> {
    GitClient::default().merge_abort()
}

pub fn rebase(branch: &str) -> Result<()> {
    GitClient::default().rebase(branch)
}

pub fn rebase_continue() -> Result<()> {
    GitClient::default().rebase_continue()
}

pub fn rebase_abort() -> Result<()> {
    GitClient::default().rebase_abort()
}

pub fn save_stash(message: &str) -> Result<()> {
    GitClient::default().save_stash(message)
}

pub fn stash_pop() -> Result<()> {
    GitClient::default().stash_pop()
}

pub fn stash_list() -> Result<String> {
    GitClient::default().stash_list()
}

pub fn stash_apply(stash_ref: &str) -> Result<()> {
    GitClient::default().stash_apply(stash_ref)
}

pub fn stash_drop(stash_ref: &str) -> Result<()> {
    GitClient::default().stash_drop(stash_ref)
}

pub fn stash_show(stash_ref: &str) -> Result<String> {
    GitClient::default().stash_show(stash_ref)
}

pub fn logs_graph() -> Result<String> {
    GitClient::default().logs_graph()
}

pub fn conflict_files() -> Result<Vec<String>> {
    GitClient::default().conflict_files()
}

/// Fetches `origin`, then checks `origin/<branch>` for commits HEAD lacks.
pub fn has_remote_changes(branch: &str) -> Result<bool> {
    GitClient::default().has_remote_changes(branch)
}

pub fn has_commits_to_push() -> Result<bool> {
    GitClient::default().has_commits_to_push()
}

