use std::process::Command;

use tracing::debug;

use crate::{GitError, Repository, Result};

impl Repository {
    /// Pushes `branch` to `remote` with the `git` binary so that the user's
    /// credential helpers and SSH configuration apply.
    ///
    /// # Errors
    ///
    /// Returns an error if `git` cannot be started or the push fails.
    pub fn push(&self, remote: &str, branch: &str) -> Result<()> {
        let command = format!("push {remote} {branch}");
        debug!(root = %self.root().display(), "git {command}");

        let status = Command::new("git")
            .arg("-C")
            .arg(self.root())
            .args(["push", remote, branch])
            .status()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(GitError::CommandFailed { command, status });
        }

        Ok(())
    }
}
