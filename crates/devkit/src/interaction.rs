use std::io;

use devkit_operations::traits::{ReleaseInteraction, VersionAction, VersionConfirmation};
use devkit_operations::{OperationError, Result};
use devkit_version::{BumpChoices, BumpType, VersionError};
use dialoguer::{Confirm, Input, Select};
use semver::Version;

/// Release prompts rendered with `dialoguer`.
pub struct TerminalReleaseInteraction;

impl TerminalReleaseInteraction {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalReleaseInteraction {
    fn default() -> Self {
        Self::new()
    }
}

fn dialoguer_to_operation_error(e: dialoguer::Error) -> OperationError {
    match e {
        dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
            OperationError::Interrupted
        }
        dialoguer::Error::IO(io_err) => OperationError::Io(io_err),
    }
}

fn menu_items(choices: &BumpChoices) -> Vec<String> {
    vec![
        format!("patch ({})", choices.patch),
        format!("minor ({})", choices.minor),
        format!("major ({})", choices.major),
        "enter a version manually".to_string(),
        "view previous versions".to_string(),
        "exit".to_string(),
    ]
}

fn action_for_index(index: Option<usize>) -> VersionAction {
    match index {
        Some(0) => VersionAction::Bump(BumpType::Patch),
        Some(1) => VersionAction::Bump(BumpType::Minor),
        Some(2) => VersionAction::Bump(BumpType::Major),
        Some(3) => VersionAction::Manual,
        Some(4) => VersionAction::ShowHistory,
        _ => VersionAction::Exit,
    }
}

fn confirmation_for_index(index: Option<usize>) -> VersionConfirmation {
    match index {
        Some(0) => VersionConfirmation::Proceed,
        Some(2) => VersionConfirmation::Retry,
        _ => VersionConfirmation::Abort,
    }
}

impl ReleaseInteraction for TerminalReleaseInteraction {
    fn select_version_action(
        &self,
        current: &Version,
        choices: &BumpChoices,
    ) -> Result<VersionAction> {
        let selection = Select::new()
            .with_prompt(format!("Current version is {current}. Choose the next version"))
            .items(&menu_items(choices))
            .default(0)
            .interact_opt()
            .map_err(dialoguer_to_operation_error)?;

        Ok(action_for_index(selection))
    }

    fn show_previous_versions(&self, versions: &[Version]) -> Result<()> {
        if versions.is_empty() {
            println!("No previous versions.");
            return Ok(());
        }

        println!("Previous versions:");
        for version in versions.iter().rev() {
            println!("  {version}");
        }
        Ok(())
    }

    fn input_version(&self) -> Result<Option<String>> {
        let input: String = Input::new()
            .with_prompt("Version (MAJOR.MINOR.PATCH, empty to cancel)")
            .allow_empty(true)
            .interact_text()
            .map_err(dialoguer_to_operation_error)?;

        Ok(Some(input))
    }

    fn report_invalid_version(&self, error: &VersionError) {
        eprintln!("{error}");
    }

    fn confirm_version(
        &self,
        version: &Version,
        previous: Option<&Version>,
    ) -> Result<VersionConfirmation> {
        let prompt = match previous {
            Some(previous) => format!("Release {previous} -> {version}?"),
            None => format!("Release {version} as the first version?"),
        };

        let selection = Select::new()
            .with_prompt(prompt)
            .items(["proceed", "abort", "choose another version"])
            .default(0)
            .interact_opt()
            .map_err(dialoguer_to_operation_error)?;

        Ok(confirmation_for_index(selection))
    }

    fn confirm_git_operations(&self, version: &Version, remote: &str) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Commit the version bump to {version} and push it to {remote}?"
            ))
            .default(false)
            .interact_opt()
            .map_err(dialoguer_to_operation_error)?;

        Ok(confirmed.unwrap_or(false))
    }
}
