use devkit_version::{BumpChoices, BumpType, VersionError};
use semver::Version;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionAction {
    Bump(BumpType),
    Manual,
    ShowHistory,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionConfirmation {
    Proceed,
    Abort,
    Retry,
}

pub trait ReleaseInteraction: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn select_version_action(
        &self,
        current: &Version,
        choices: &BumpChoices,
    ) -> Result<VersionAction>;

    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn show_previous_versions(&self, versions: &[Version]) -> Result<()>;

    /// Raw manual entry. `None` means the prompt was dismissed.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn input_version(&self) -> Result<Option<String>>;

    fn report_invalid_version(&self, error: &VersionError);

    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn confirm_version(
        &self,
        version: &Version,
        previous: Option<&Version>,
    ) -> Result<VersionConfirmation>;

    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn confirm_git_operations(&self, version: &Version, remote: &str) -> Result<bool>;
}
