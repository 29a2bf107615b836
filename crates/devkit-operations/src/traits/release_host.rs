use std::path::{Path, PathBuf};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    pub tag: String,
    /// Branch the tag is created on when it does not exist yet.
    pub target: Option<String>,
    pub title: String,
    pub notes: String,
    pub assets: Vec<PathBuf>,
}

/// The service releases are published to.
pub trait ReleaseHost: Send + Sync {
    /// Tags of every published release.
    ///
    /// # Errors
    ///
    /// Returns an error if the release list cannot be fetched.
    fn release_tags(&self, project_root: &Path) -> Result<Vec<String>>;

    /// # Errors
    ///
    /// Returns an error if the repository URL cannot be determined.
    fn repository_url(&self, project_root: &Path) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the release cannot be created.
    fn create_release(&self, project_root: &Path, request: &ReleaseRequest) -> Result<()>;
}
