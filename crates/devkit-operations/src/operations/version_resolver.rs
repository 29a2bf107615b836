use devkit_version::{BumpChoices, validate_candidate};
use semver::Version;
use tracing::debug;

use crate::Result;
use crate::traits::{ReleaseInteraction, VersionAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolverState {
    Menu,
    ManualEntry,
    ShowHistory,
}

/// Drives the version menu until a valid, unused version is chosen or the
/// user backs out.
pub struct VersionResolver<'a, I> {
    interaction: &'a I,
}

impl<'a, I: ReleaseInteraction> VersionResolver<'a, I> {
    pub fn new(interaction: &'a I) -> Self {
        Self { interaction }
    }

    /// Returns `None` when the user exits the menu or submits an empty entry.
    ///
    /// Without a `current` version there is nothing to bump from, so only
    /// manual entry is offered.
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt cannot be shown.
    pub fn resolve(
        &self,
        existing: &[Version],
        current: Option<&Version>,
    ) -> Result<Option<Version>> {
        let mut state = if current.is_some() {
            ResolverState::Menu
        } else {
            ResolverState::ManualEntry
        };

        loop {
            state = match (state, current) {
                (ResolverState::Menu, Some(current)) => {
                    let choices = BumpChoices::from_current(current);
                    match self.interaction.select_version_action(current, &choices)? {
                        VersionAction::Bump(bump) => return Ok(Some(choices.get(bump).clone())),
                        VersionAction::Manual => ResolverState::ManualEntry,
                        VersionAction::ShowHistory => ResolverState::ShowHistory,
                        VersionAction::Exit => return Ok(None),
                    }
                }
                (ResolverState::Menu | ResolverState::ManualEntry, _) => {
                    let Some(input) = self.interaction.input_version()? else {
                        return Ok(None);
                    };
                    match validate_candidate(&input, existing, current) {
                        Ok(version) => return Ok(version),
                        Err(err) => {
                            debug!(input = %input.trim(), "rejected version: {err}");
                            self.interaction.report_invalid_version(&err);
                            ResolverState::ManualEntry
                        }
                    }
                }
                (ResolverState::ShowHistory, _) => {
                    self.interaction.show_previous_versions(existing)?;
                    ResolverState::Menu
                }
            };
        }
    }
}
