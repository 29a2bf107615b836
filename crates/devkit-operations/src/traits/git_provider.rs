use std::path::Path;

use devkit_git::CommitInfo;

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or HEAD is detached.
    fn current_branch(&self, project_root: &Path) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or tags cannot be listed.
    fn tags(&self, project_root: &Path) -> Result<Vec<String>>;

    /// # Errors
    ///
    /// Returns an error if the index cannot be reset.
    fn reset_staged(&self, project_root: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if staging any of the files fails.
    fn stage_files(&self, project_root: &Path, paths: &[&Path]) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the commit cannot be created.
    fn commit(&self, project_root: &Path, message: &str) -> Result<CommitInfo>;

    /// # Errors
    ///
    /// Returns an error if the push is rejected or cannot be started.
    fn push(&self, project_root: &Path, remote: &str, branch: &str) -> Result<()>;
}
