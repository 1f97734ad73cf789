//! Subprocess driver for the external `git` binary
//!
//! All repository mutation is delegated to real git: branch creation,
//! staging and commit creation. Only the exit status of each invocation is
//! inspected; git's own output passes through to the user untouched.

use anyhow::Context;
use chrono::{DateTime, Local};
use derive_new::new;
use std::path::Path;
use std::process::Command;

#[derive(new)]
pub struct Git {
    repo_path: Box<Path>,
}

impl Git {
    /// Creates and switches to a fresh branch.
    pub fn create_branch(&self, name: &str) -> anyhow::Result<()> {
        self.run(Command::new("git").args(["checkout", "-b", name]))
    }

    /// Stages a path relative to the repository root.
    pub fn stage(&self, path: &str) -> anyhow::Result<()> {
        self.run(Command::new("git").args(["add", path]))
    }

    /// Creates an empty commit whose author and committer dates are both
    /// forced to `timestamp`. The date overrides are set on the child's
    /// environment only, never on this process.
    pub fn commit(&self, message: &str, timestamp: &DateTime<Local>) -> anyhow::Result<()> {
        let date = timestamp.to_rfc3339();

        self.run(
            Command::new("git")
                .args(["commit", "--allow-empty", "-m", message])
                .env("GIT_AUTHOR_DATE", &date)
                .env("GIT_COMMITTER_DATE", &date),
        )
    }

    fn run(&self, command: &mut Command) -> anyhow::Result<()> {
        let subcommand = command
            .get_args()
            .next()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_default();

        let status = command
            .current_dir(&self.repo_path)
            .status()
            .with_context(|| format!("failed to run 'git {subcommand}'"))?;

        if !status.success() {
            anyhow::bail!("'git {subcommand}' exited with {status}");
        }

        Ok(())
    }
}
