use std::path::Path;

use devkit_project::Project;

use crate::Result;

pub trait ProjectProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if no project can be found from the given path.
    fn discover_project(&self, start_path: &Path) -> Result<Project>;
}
