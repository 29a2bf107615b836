mod app_launcher;
mod build_runner;
mod git_provider;
mod interaction;
mod project_provider;
mod release_host;
mod version_file;

pub use app_launcher::AppLauncher;
pub use build_runner::BuildRunner;
pub use git_provider::GitProvider;
pub use interaction::{ReleaseInteraction, VersionAction, VersionConfirmation};
pub use project_provider::ProjectProvider;
pub use release_host::{ReleaseHost, ReleaseRequest};
pub use version_file::VersionFileWriter;
