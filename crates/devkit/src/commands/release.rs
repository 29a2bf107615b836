use std::path::Path;

use devkit_operations::operations::{
    GH_HINT, GIT_HINT, ReleaseInput, ReleaseOperation, ReleaseOutcome, ReleaseSummary,
    require_tool,
};
use devkit_operations::providers::{
    CommandBuildRunner, FileSystemProjectProvider, GhCliReleaseHost, Git2Provider,
    JsonVersionFileWriter,
};
use devkit_operations::traits::ProjectProvider;

use super::ReleaseArgs;
use crate::environment::non_interactive_reason;
use crate::error::{CliError, Result};
use crate::interaction::TerminalReleaseInteraction;

pub(crate) fn run(args: ReleaseArgs, start_path: &Path) -> Result<()> {
    let project_provider = FileSystemProjectProvider::new();
    project_provider.discover_project(start_path)?;

    if let Some(reason) = non_interactive_reason() {
        return Err(CliError::NotInteractive {
            reason: reason.to_string(),
        });
    }
    require_tool("git", GIT_HINT)?;
    require_tool("gh", GH_HINT)?;

    let operation = ReleaseOperation::new(
        project_provider,
        Git2Provider::new(),
        GhCliReleaseHost::new(),
        CommandBuildRunner::new(),
        JsonVersionFileWriter::new(),
        TerminalReleaseInteraction::new(),
    );
    let input = ReleaseInput {
        dry_run: args.dry_run,
    };
    let outcome = operation.execute(start_path, &input)?;

    print_outcome(&outcome);

    Ok(())
}

fn print_outcome(outcome: &ReleaseOutcome) {
    match outcome {
        ReleaseOutcome::Published(summary) => {
            print_summary(summary);
            println!("\nRelease complete.");
        }
        ReleaseOutcome::DryRun(summary) => {
            println!("Dry run - no changes were made.\n");
            print_summary(summary);
            println!("\nDry run complete.");
        }
        ReleaseOutcome::Aborted => {
            println!("Release aborted.");
        }
        ReleaseOutcome::ChangelogMissing { version, changelog } => {
            println!(
                "Add a `# {version}` section to {} and run the release again.",
                changelog.display()
            );
        }
    }
}

fn print_summary(summary: &ReleaseSummary) {
    match &summary.previous_version {
        Some(previous) => println!("Version: {previous} -> {}", summary.version),
        None => println!("Version: {} (first release)", summary.version),
    }
    if let Some(branch) = &summary.branch {
        println!("Branch: {branch}");
    }
    if let Some(commit) = &summary.commit {
        println!("Commit: {}", commit.sha);
    }

    if summary.assets.is_empty() {
        println!("Assets: none");
    } else {
        println!("Assets:");
        for asset in &summary.assets {
            println!("  {}", asset.display());
        }
    }
}
