mod release;
mod start;

use std::path::Path;

use clap::{Args, Subcommand};

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Start the companion app with remote debugging enabled
    Start,
    /// Pick a version, update manifests, commit, build and publish a release
    Release(ReleaseArgs),
}

#[derive(Args)]
pub(crate) struct ReleaseArgs {
    /// Walk through the release without changing files, git or the release host
    #[arg(long)]
    pub dry_run: bool,
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path) -> Result<()> {
        match self {
            Self::Start => start::run(start_path),
            Self::Release(args) => release::run(args, start_path),
        }
    }
}
