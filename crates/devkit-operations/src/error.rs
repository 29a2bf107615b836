use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Version(#[from] devkit_version::VersionError),

    #[error(transparent)]
    Changelog(#[from] devkit_changelog::ChangelogError),

    #[error(transparent)]
    Manifest(#[from] devkit_manifest::ManifestError),

    #[error(transparent)]
    Git(#[from] devkit_git::GitError),

    #[error(transparent)]
    Project(#[from] devkit_project::ProjectError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("branch '{branch}' is not a release branch (allowed: {})", allowed.join(", "))]
    BranchNotAllowed {
        branch: String,
        allowed: Vec<String>,
    },

    #[error("current branch is unknown; cannot push the release commit")]
    BranchUnknown,

    #[error("build command is empty")]
    EmptyBuildCommand,

    #[error("build `{command}` exited with {status}")]
    BuildFailed { command: String, status: ExitStatus },

    #[error("failed to run `{command}`")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("unexpected output from `{command}`")]
    UnexpectedOutput {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("required tool '{tool}' was not found on PATH; {hint}")]
    ToolMissing { tool: String, hint: &'static str },

    #[error("failed to list release assets in '{path}'")]
    AssetCollection {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("release asset '{path}' contains '#', which gh reads as a label separator")]
    UnsupportedAssetPath { path: PathBuf },

    #[error("failed to launch '{program}'")]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("interactive terminal required")]
    InteractionRequired,

    #[error("interrupted")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, OperationError>;
