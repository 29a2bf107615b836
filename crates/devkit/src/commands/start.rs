use std::path::Path;

use devkit_operations::operations::{APP_ENV, LaunchConfig, StartOperation, StartOutcome};
use devkit_operations::providers::{FileSystemProjectProvider, SystemAppLauncher};
use devkit_operations::traits::ProjectProvider;
use devkit_project::StartConfig;
use tracing::{debug, warn};

use crate::error::Result;

pub(crate) fn run(start_path: &Path) -> Result<()> {
    let start_config = match FileSystemProjectProvider::new().discover_project(start_path) {
        Ok(project) => project.config.start().clone(),
        Err(err) => {
            debug!("using default start settings: {err}");
            StartConfig::default()
        }
    };

    let app = std::env::var_os(APP_ENV);
    let config = LaunchConfig::resolve(app.as_deref(), &start_config);
    let outcome = StartOperation::new(SystemAppLauncher::new()).execute(config.as_ref());

    print_outcome(&outcome, config.as_ref());
    Ok(())
}

fn print_outcome(outcome: &StartOutcome, config: Option<&LaunchConfig>) {
    match outcome {
        StartOutcome::NotConfigured => {
            warn!(
                "{APP_ENV} is not set. Point it at the application executable, \
                 e.g. {APP_ENV}=/Applications/Obsidian.app/Contents/MacOS/Obsidian"
            );
        }
        StartOutcome::AlreadyRunning { process_name } => {
            println!("{process_name} is already running.");
        }
        StartOutcome::Launched { program, pid } => {
            let port = config.map_or(0, |config| config.debug_port);
            println!(
                "Started {} (pid {pid}) with remote debugging on port {port}.",
                program.display()
            );
        }
        StartOutcome::LaunchFailed { program, reason } => {
            warn!(
                "could not start {}: {reason}. Check that {APP_ENV} points at the application executable.",
                program.display()
            );
        }
    }
}
