use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::traits::BuildRunner;
use crate::{OperationError, Result};

/// Runs the configured build command with inherited stdio.
pub struct CommandBuildRunner;

impl CommandBuildRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommandBuildRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildRunner for CommandBuildRunner {
    fn run_build(&self, project_root: &Path, command: &[String]) -> Result<()> {
        let Some((program, args)) = command.split_first() else {
            return Err(OperationError::EmptyBuildCommand);
        };
        let rendered = command.join(" ");
        debug!(root = %project_root.display(), "running build `{rendered}`");

        let status = Command::new(program)
            .args(args)
            .current_dir(project_root)
            .status()
            .map_err(|source| OperationError::CommandSpawn {
                command: rendered.clone(),
                source,
            })?;

        if !status.success() {
            return Err(OperationError::BuildFailed {
                command: rendered,
                status,
            });
        }

        Ok(())
    }
}
