use std::path::Path;

use devkit_git::{CommitInfo, Repository};

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn current_branch(&self, project_root: &Path) -> Result<String> {
        let repo = Repository::open(project_root)?;
        Ok(repo.current_branch()?)
    }

    fn tags(&self, project_root: &Path) -> Result<Vec<String>> {
        let repo = Repository::open(project_root)?;
        Ok(repo.tags()?)
    }

    fn reset_staged(&self, project_root: &Path) -> Result<()> {
        let repo = Repository::open(project_root)?;
        Ok(repo.reset_staged()?)
    }

    fn stage_files(&self, project_root: &Path, paths: &[&Path]) -> Result<()> {
        let repo = Repository::open(project_root)?;
        Ok(repo.stage_files(paths)?)
    }

    fn commit(&self, project_root: &Path, message: &str) -> Result<CommitInfo> {
        let repo = Repository::open(project_root)?;
        Ok(repo.commit(message)?)
    }

    fn push(&self, project_root: &Path, remote: &str, branch: &str) -> Result<()> {
        let repo = Repository::open(project_root)?;
        Ok(repo.push(remote, branch)?)
    }
}
