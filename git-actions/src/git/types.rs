//! Git-related types for git-actions.
//!
//! This module defines data structures parsed from git's text output:
//! - [`StashEntry`] - One line of `git stash list`
//! - [`stash_ref`] - Extracts the `stash@{N}` token from a stash-list line

use serde::{Deserialize, Serialize};

/// Reference of the most recent stash, used when none can be extracted.
pub const DEFAULT_STASH_REF: &str = "stash@{0}";

/// Extracts the stash reference from a `git stash list` line.
///
/// Takes everything before the first `:` and trims it, so
/// `"stash@{2}: WIP on main"` yields `"stash@{2}"`. Falls back to
/// [`DEFAULT_STASH_REF`] when that segment is empty.
pub fn stash_ref(line: &str) -> String {
    let head = line.split_once(':').map_or(line, |(head, _)| head).trim();
    if head.is_empty() {
        DEFAULT_STASH_REF.to_string()
    } else {
        head.to_string()
    }
}

/// Represents a git stash entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashEntry {
    /// Stash index (e.g., 0 for stash@{0}).
    pub index: usize,

    /// Full reference, usable with apply/drop/show.
    pub reference: String,

    /// Stash message.
    pub message: String,

    /// Branch the stash was created on.
    pub branch: Option<String>,
}

impl StashEntry {
    /// Parses one line in git's default `stash list` format.
    ///
    /// Returns `None` for lines that don't start with a `stash@{N}:` reference.
    pub fn parse(line: &str) -> Option<Self> {
        let (reference, rest) = line.trim().split_once(':')?;
        let reference = reference.trim();
        let index = reference
            .strip_prefix("stash@{")?
            .strip_suffix('}')?
            .parse()
            .ok()?;

        let rest = rest.trim();
        // "WIP on <branch>: ..." for bare stashes, "On <branch>: ..." for `-m` stashes
        let (branch, message) = match rest
            .strip_prefix("WIP on ")
            .or_else(|| rest.strip_prefix("On "))
            .and_then(|tail| tail.split_once(':'))
        {
            Some((branch, message)) => (Some(branch.trim().to_string()), message.trim()),
            None => (None, rest),
        };

        Some(Self {
            index,
            reference: reference.to_string(),
            message: message.to_string(),
            branch,
        })
    }
}

/// Parses full `git stash list` output, skipping lines that don't parse.
pub fn parse_stash_list(output: &str) -> Vec<StashEntry> {
    output.lines().filter_map(StashEntry::parse).collect()
}
