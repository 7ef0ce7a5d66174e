//! Git operations for git-actions.
//!
//! [`GitClient`] maps each operation onto a fixed git argument vector and
//! runs it through a [`CommandRunner`]. Operations that only need
//! success/failure use combined output; operations whose stdout is parsed
//! use captured output.

use std::path::Path;

use crate::config::{load_config, GitSettings};
use crate::error::Result;
use crate::git::runner::{CommandRunner, GitRunner};
use crate::git::types::{parse_stash_list, StashEntry};

/// Client for git operations against one working directory.
///
/// Holds no state between calls beyond its configuration.
#[derive(Debug, Clone)]
pub struct GitClient<R = GitRunner> {
    runner: R,
    remote: String,
}

impl GitClient<GitRunner> {
    /// Creates a client for `working_dir` with default settings.
    ///
    /// An empty path means the caller's current directory.
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self::with_settings(working_dir, &GitSettings::default())
    }

    /// Creates a client from explicit settings.
    pub fn with_settings(working_dir: impl AsRef<Path>, settings: &GitSettings) -> Self {
        Self {
            runner: GitRunner::with_settings(working_dir, settings),
            remote: settings.remote.clone(),
        }
    }

    /// Creates a client from the user's config file (and env overrides).
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn from_config(working_dir: impl AsRef<Path>) -> Result<Self> {
        let config = load_config()?;
        Ok(Self::with_settings(working_dir, &config.git))
    }
}

impl Default for GitClient<GitRunner> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<R: CommandRunner> GitClient<R> {
    /// Wraps an existing runner, comparing against `origin`.
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            remote: GitSettings::default().remote,
        }
    }

    /// Uses a different remote for remote-tracking comparisons.
    #[must_use]
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    /// The underlying runner.
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Remote used by [`fetch`](Self::fetch) and [`has_remote_changes`](Self::has_remote_changes).
    pub fn remote(&self) -> &str {
        &self.remote
    }

    fn combined(&self, args: &[&str]) -> Result<()> {
        self.runner.run_combined(&argv(args))?;
        Ok(())
    }

    fn captured(&self, args: &[&str]) -> Result<String> {
        let stdout = self.runner.run_captured(&argv(args))?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    /// Stages a file.
    pub fn add(&self, file: &str) -> Result<()> {
        self.combined(&["add", file])
    }

    /// Unstages a file.
    pub fn reset(&self, file: &str) -> Result<()> {
        self.combined(&["reset", "HEAD", file])
    }

    /// Commits the index with `message`.
    pub fn commit(&self, message: &str) -> Result<()> {
        self.combined(&["commit", "-m", message])
    }

    /// Merges `branch` into the current branch.
    ///
    /// A conflicting merge returns an error for which
    /// [`GitError::is_conflict`](crate::git::GitError::is_conflict) is true.
    pub fn merge(&self, branch: &str) -> Result<()> {
        self.combined(&["merge", branch])
    }

    pub fn merge_continue(&self) -> Result<()> {
        self.combined(&["merge", "--continue"])
    }

    pub fn merge_abort(&self) -> Result<()> {
        self.combined(&["merge", "--abort"])
    }

    /// Rebases the current branch onto `branch`.
    pub fn rebase(&self, branch: &str) -> Result<()> {
        self.combined(&["rebase", branch])
    }

    pub fn rebase_continue(&self) -> Result<()> {
        self.combined(&["rebase", "--continue"])
    }

    pub fn rebase_abort(&self) -> Result<()> {
        self.combined(&["rebase", "--abort"])
    }

    /// Stashes working-tree changes under `message`.
    pub fn save_stash(&self, message: &str) -> Result<()> {
        self.combined(&["stash", "push", "-m", message])
    }

    pub fn stash_pop(&self) -> Result<()> {
        self.combined(&["stash", "pop"])
    }

    /// Raw `git stash list` output.
    pub fn stash_list(&self) -> Result<String> {
        self.captured(&["stash", "list"])
    }

    /// `git stash list` parsed into entries, newest first.
    pub fn stash_entries(&self) -> Result<Vec<StashEntry>> {
        Ok(parse_stash_list(&self.stash_list()?))
    }

    pub fn stash_apply(&self, stash_ref: &str) -> Result<()> {
        self.combined(&["stash", "apply", stash_ref])
    }

    pub fn stash_drop(&self, stash_ref: &str) -> Result<()> {
        self.combined(&["stash", "drop", stash_ref])
    }

    /// Patch of a stash entry.
    pub fn stash_show(&self, stash_ref: &str) -> Result<String> {
        self.captured(&["stash", "show", "-p", stash_ref])
    }

    /// One-line graph of every ref.
    pub fn logs_graph(&self) -> Result<String> {
        self.captured(&["log", "--graph", "--oneline", "--all"])
    }

    /// Files with unresolved conflicts, in git's order.
    pub fn conflict_files(&self) -> Result<Vec<String>> {
        let output = self.captured(&["diff", "--name-only", "--diff-filter=U"])?;
        Ok(output
            .trim()
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect())
    }

    /// Fetches the configured remote.
    pub fn fetch(&self) -> Result<()> {
        self.combined(&["fetch", &self.remote])
    }

    /// Fetches, then reports whether `<remote>/<branch>` has commits HEAD lacks.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or the count fails.
    pub fn has_remote_changes(&self, branch: &str) -> Result<bool> {
        self.fetch()?;

        let range = format!("HEAD..{}/{branch}", self.remote);
        let count = self.captured(&["rev-list", "--count", &range])?;
        Ok(count.trim() != "0")
    }

    /// Reports whether HEAD has commits its upstream lacks.
    ///
    /// Never fails: a repository without commits reads as `false`, and a
    /// branch without an upstream reads as `true` when it has any commits.
    // TODO: only treat "no upstream configured" as the fallback case; any other
    // failure of the second rev-list (e.g. detached HEAD) currently lands there too.
    pub fn has_commits_to_push(&self) -> Result<bool> {
        let Ok(output) = self.captured(&["rev-list", "--count", "HEAD"]) else {
            return Ok(false);
        };

        let local_commits = output.trim();
        if local_commits == "0" {
            return Ok(false);
        }

        match self.captured(&["rev-list", "--count", "HEAD", "^@{u}"]) {
            Ok(ahead) => Ok(ahead.trim() != "0"),
            Err(_) => Ok(local_commits != "0"),
        }
    }
}

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}


/// Tests against the real git binary using throwaway repositories.
#[cfg(test)]
mod process_tests {
    use std::fs;
    use std::process::Command;

    use git2::{Repository, Signature};
    use tempfile::TempDir;

    use super::*;
    use crate::git::types::stash_ref;
    use crate::git::GitError;

    fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .is_ok_and(|output| output.status.success())
    }

    /// Settings that isolate git from the host's global config.
    fn isolated_settings(home: &Path) -> GitSettings {
        let mut settings = GitSettings {
            c_locale: true,
            ..GitSettings::default()
        };
        let home = home.to_string_lossy().into_owned();
        for (key, value) in [
            ("HOME", home.as_str()),
            ("GIT_CONFIG_NOSYSTEM", "1"),
            ("GIT_AUTHOR_NAME", "Test"),
            ("GIT_AUTHOR_EMAIL", "test@test.com"),
            ("GIT_COMMITTER_NAME", "Test"),
            ("GIT_COMMITTER_EMAIL", "test@test.com"),
        ] {
            settings.env.insert(key.to_string(), value.to_string());
        }
        settings
    }

    struct Fixture {
        _home: TempDir,
        dir: TempDir,
        settings: GitSettings,
        branch: String,
    }

    impl Fixture {
        fn client(&self) -> GitClient {
            GitClient::with_settings(self.dir.path(), &self.settings)
        }

        fn write(&self, name: &str, contents: &str) {
            fs::write(self.dir.path().join(name), contents).unwrap();
        }

        fn git(&self, args: &[&str]) {
            self.client().runner().run_combined(&argv(args)).unwrap();
        }
    }

    fn init_test_repo() -> Fixture {
        let home = TempDir::new().unwrap();
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        fs::write(dir.path().join("a.txt"), "base\n").unwrap();

        // Create initial commit
        {
            let sig = Signature::now("Test", "test@test.com").unwrap();
            let mut index = repo.index().unwrap();
            index.add_path(Path::new("a.txt")).unwrap();
            index.write().unwrap();
            let tree_id = index.write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
                .unwrap();
        }

        let branch = repo.head().unwrap().shorthand().unwrap().to_string();
        let settings = isolated_settings(home.path());

        Fixture {
            _home: home,
            dir,
            settings,
            branch,
        }
    }

    #[test]
    fn stage_commit_and_graph() {
        if !git_available() {
            return;
        }
        let fx = init_test_repo();
        let client = fx.client();

        fx.write("b.txt", "new\n");
        client.add("b.txt").unwrap();
        client.commit("Add b").unwrap();

        let graph = client.logs_graph().unwrap();
        assert!(graph.contains("Add b"));
        assert!(graph.contains("Initial commit"));
    }

    #[test]
    fn reset_unstages_file() {
        if !git_available() {
            return;
        }
        let fx = init_test_repo();
        let client = fx.client();

        fx.write("b.txt", "new\n");
        client.add("b.txt").unwrap();
        client.reset("b.txt").unwrap();

        let err = client.commit("Nothing staged").unwrap_err();
        assert!(err.is_command_failed());
    }

    #[test]
    fn commit_with_clean_tree_fails_with_diagnostics() {
        if !git_available() {
            return;
        }
        let fx = init_test_repo();

        let err = fx.client().commit("Empty").unwrap_err();
        let output = err.as_git().and_then(GitError::output).unwrap();
        assert!(output.contains("nothing to commit"));
    }

    #[test]
    fn stash_round_trip() {
        if !git_available() {
            return;
        }
        let fx = init_test_repo();
        let client = fx.client();

        fx.write("a.txt", "changed\n");
        client.save_stash("wip change").unwrap();

        let first = client.stash_list().unwrap();
        let second = client.stash_list().unwrap();
        assert_eq!(first, second);
        assert!(first.contains("wip change"));

        let entries = client.stash_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].branch.as_deref(), Some(fx.branch.as_str()));
        let reference = stash_ref(first.lines().next().unwrap());
        assert_eq!(reference, entries[0].reference);

        let patch = client.stash_show(&reference).unwrap();
        assert!(patch.contains("+changed"));

        client.stash_apply(&reference).unwrap();
        client.stash_drop(&reference).unwrap();
        assert!(client.stash_list().unwrap().is_empty());

        assert!(client.stash_pop().is_err());
    }

    #[test]
    fn merge_conflict_is_reported_and_aborted() {
        if !git_available() {
            return;
        }
        let fx = init_test_repo();
        let client = fx.client();

        fx.git(&["checkout", "-b", "feature"]);
        fx.write("a.txt", "feature\n");
        client.add("a.txt").unwrap();
        client.commit("Feature change").unwrap();

        fx.git(&["checkout", &fx.branch]);
        fx.write("a.txt", "mainline\n");
        client.add("a.txt").unwrap();
        client.commit("Mainline change").unwrap();

        let err = client.merge("feature").unwrap_err();
        assert!(err.as_git().is_some_and(GitError::is_conflict));
        assert_eq!(client.conflict_files().unwrap(), vec!["a.txt"]);

        client.merge_abort().unwrap();
        assert!(client.conflict_files().unwrap().is_empty());
    }

    #[test]
    fn rebase_onto_branch() {
        if !git_available() {
            return;
        }
        let fx = init_test_repo();
        let client = fx.client();

        fx.git(&["checkout", "-b", "feature"]);
        fx.write("b.txt", "feature\n");
        client.add("b.txt").unwrap();
        client.commit("Feature file").unwrap();

        fx.git(&["checkout", &fx.branch]);
        fx.write("c.txt", "main\n");
        client.add("c.txt").unwrap();
        client.commit("Main file").unwrap();

        fx.git(&["checkout", "feature"]);
        client.rebase(&fx.branch).unwrap();
        assert!(fx.dir.path().join("c.txt").exists());

        // Nothing in progress
        assert!(client.rebase_abort().is_err());
    }

    #[test]
    fn commits_to_push_without_upstream() {
        if !git_available() {
            return;
        }
        let fx = init_test_repo();
        assert!(fx.client().has_commits_to_push().unwrap());
    }

    #[test]
    fn commits_to_push_in_empty_repo() {
        if !git_available() {
            return;
        }
        let home = TempDir::new().unwrap();
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();

        let client = GitClient::with_settings(dir.path(), &isolated_settings(home.path()));
        assert!(!client.has_commits_to_push().unwrap());
    }

    #[test]
    fn remote_tracking_checks() {
        if !git_available() {
            return;
        }
        let origin = init_test_repo();
        let parent = TempDir::new().unwrap();
        let clone_dir = parent.path().join("clone");

        GitClient::with_settings(parent.path(), &origin.settings)
            .runner()
            .run_combined(&argv(&[
                "clone",
                &origin.dir.path().to_string_lossy(),
                &clone_dir.to_string_lossy(),
            ]))
            .unwrap();
        let clone = GitClient::with_settings(&clone_dir, &origin.settings);

        assert!(!clone.has_remote_changes(&origin.branch).unwrap());
        assert!(!clone.has_commits_to_push().unwrap());

        origin.write("a.txt", "upstream\n");
        let upstream = origin.client();
        upstream.add("a.txt").unwrap();
        upstream.commit("Upstream change").unwrap();
        assert!(clone.has_remote_changes(&origin.branch).unwrap());

        fs::write(clone_dir.join("d.txt"), "local\n").unwrap();
        clone.add("d.txt").unwrap();
        clone.commit("Local change").unwrap();
        assert!(clone.has_commits_to_push().unwrap());
    }

    #[test]
    fn remote_changes_without_remote_fails() {
        if !git_available() {
            return;
        }
        let fx = init_test_repo();
        assert!(fx.client().has_remote_changes(&fx.branch).is_err());
    }
}
