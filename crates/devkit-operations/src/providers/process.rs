use std::path::Path;
use std::process::{Command, Stdio};

use sysinfo::{ProcessesToUpdate, System};
use tracing::debug;

use crate::traits::AppLauncher;
use crate::{OperationError, Result};

/// Inspects the live process table and starts detached processes.
pub struct SystemAppLauncher;

impl SystemAppLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemAppLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl AppLauncher for SystemAppLauncher {
    fn is_running(&self, process_name: &str) -> bool {
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::All, true);

        system
            .processes()
            .values()
            .any(|process| name_matches(&process.name().to_string_lossy(), process_name))
    }

    fn launch(&self, program: &Path, args: &[String]) -> Result<u32> {
        debug!(program = %program.display(), ?args, "launching detached process");

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let child = command.spawn().map_err(|source| OperationError::Launch {
            program: program.to_path_buf(),
            source,
        })?;

        Ok(child.id())
    }
}

fn name_matches(candidate: &str, wanted: &str) -> bool {
    !wanted.is_empty() && candidate.to_lowercase().contains(&wanted.to_lowercase())
}
