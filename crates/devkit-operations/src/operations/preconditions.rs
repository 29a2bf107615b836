use std::path::PathBuf;

use tracing::debug;

use crate::{OperationError, Result};

pub const GIT_HINT: &str = "install git from https://git-scm.com/downloads";
pub const GH_HINT: &str =
    "install the GitHub CLI from https://cli.github.com and run `gh auth login`";

/// Resolves `tool` on `PATH`.
///
/// # Errors
///
/// Returns `OperationError::ToolMissing` carrying `hint` when the executable
/// cannot be found.
pub fn require_tool(tool: &str, hint: &'static str) -> Result<PathBuf> {
    match which::which(tool) {
        Ok(path) => {
            debug!(tool, path = %path.display(), "found required tool");
            Ok(path)
        }
        Err(_) => Err(OperationError::ToolMissing {
            tool: tool.to_string(),
            hint,
        }),
    }
}
