use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use devkit_project::StartConfig;
use tracing::debug;

use crate::traits::AppLauncher;

/// Environment variable naming the companion application executable.
pub const APP_ENV: &str = "DEVKIT_APP";
pub const DEBUG_PORT_FLAG: &str = "--remote-debugging-port";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub program: PathBuf,
    /// Matched case-insensitively as a substring of live process names.
    pub process_name: String,
    pub args: Vec<String>,
    pub debug_port: u16,
}

impl LaunchConfig {
    /// Builds a launch configuration from the application path and the
    /// `[start]` settings. Returns `None` when no usable path is given.
    #[must_use]
    pub fn resolve(app: Option<&OsStr>, start: &StartConfig) -> Option<Self> {
        let program = PathBuf::from(app.filter(|app| !app.is_empty())?);
        let process_name = match start.process_name() {
            Some(name) => name.to_string(),
            None => default_process_name(&program)?,
        };

        Some(Self {
            program,
            process_name,
            args: start.args().to_vec(),
            debug_port: start.debug_port(),
        })
    }

    /// Configured arguments followed by the debug port flag.
    #[must_use]
    pub fn launch_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(format!("{DEBUG_PORT_FLAG}={}", self.debug_port));
        args
    }
}

fn default_process_name(program: &Path) -> Option<String> {
    let stem = program.file_stem()?.to_string_lossy().to_lowercase();
    (!stem.is_empty()).then_some(stem)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    AlreadyRunning { process_name: String },
    Launched { program: PathBuf, pid: u32 },
    NotConfigured,
    LaunchFailed { program: PathBuf, reason: String },
}

pub struct StartOperation<L> {
    launcher: L,
}

impl<L: AppLauncher> StartOperation<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    /// Starts the application unless it is already running. Never fails;
    /// problems are reported through the outcome.
    pub fn execute(&self, config: Option<&LaunchConfig>) -> StartOutcome {
        let Some(config) = config else {
            debug!("{APP_ENV} is not set");
            return StartOutcome::NotConfigured;
        };

        if self.launcher.is_running(&config.process_name) {
            debug!("{} is already running", config.process_name);
            return StartOutcome::AlreadyRunning {
                process_name: config.process_name.clone(),
            };
        }

        match self.launcher.launch(&config.program, &config.launch_args()) {
            Ok(pid) => {
                debug!(pid, "started {}", config.program.display());
                StartOutcome::Launched {
                    program: config.program.clone(),
                    pid,
                }
            }
            Err(err) => {
                debug!("could not start {}: {err}", config.program.display());
                StartOutcome::LaunchFailed {
                    program: config.program.clone(),
                    reason: err.to_string(),
                }
            }
        }
    }
}
