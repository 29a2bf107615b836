use std::path::Path;

use devkit_project::{Project, discover_project};

use crate::Result;
use crate::traits::ProjectProvider;

pub struct FileSystemProjectProvider;

impl FileSystemProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectProvider for FileSystemProjectProvider {
    fn discover_project(&self, start_path: &Path) -> Result<Project> {
        Ok(discover_project(start_path)?)
    }
}
