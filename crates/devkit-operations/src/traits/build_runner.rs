use std::path::Path;

use crate::Result;

pub trait BuildRunner: Send + Sync {
    /// Runs `command` in `project_root`, streaming its output to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be started or exits unsuccessfully.
    fn run_build(&self, project_root: &Path, command: &[String]) -> Result<()>;
}
