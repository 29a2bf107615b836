mod commands;
mod environment;
mod error;
mod interaction;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use crate::commands::Commands;
use crate::error::CliError;

const INTERRUPTED: &str = "Interrupted. Files already written keep their changes.";

#[derive(Parser)]
#[command(name = "devkit")]
#[command(bin_name = "devkit")]
#[command(about = "Debug-launch the companion app and cut plugin releases", long_about = None)]
struct Cli {
    /// Path to start project discovery from (default: current directory)
    #[arg(long = "path", short = 'C', global = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage mistakes are not failures.
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
    };

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    logging::init();
    install_interrupt_handler();

    let start_path = match resolve_start_path(cli.path) {
        Ok(path) => path,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    match command.execute(&start_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_interrupt() => {
            println!("\n{INTERRUPTED}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Ctrl-C outside a prompt (build, `git push`, `gh`) arrives as SIGINT
/// rather than as a key press; it ends the run the same way.
fn install_interrupt_handler() {
    if let Err(err) = ctrlc::set_handler(|| {
        println!("\n{INTERRUPTED}");
        std::process::exit(0);
    }) {
        tracing::warn!("could not install the interrupt handler: {err}");
    }
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
