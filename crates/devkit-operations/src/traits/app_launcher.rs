use std::path::Path;

use crate::Result;

pub trait AppLauncher: Send + Sync {
    /// Whether a live process name contains `process_name`, ignoring case.
    fn is_running(&self, process_name: &str) -> bool;

    /// Starts `program` detached and returns its process id without waiting.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn launch(&self, program: &Path, args: &[String]) -> Result<u32>;
}
