mod commit;
mod remote;
mod staging;
mod status;
mod tag;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

/// A git working tree discovered from any path inside it.
pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git working tree.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        let root = inner.workdir().ok_or_else(|| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        // Strip the \\?\ prefix on Windows
        let root = dunce::simplified(root).to_path_buf();

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn to_relative_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            let normalized = dunce::simplified(path);
            normalized
                .strip_prefix(&self.root)
                .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
        } else {
            path.to_path_buf()
        }
    }
}
