mod build;
mod git;
mod github_cli;
mod process;
mod project;
mod version_file;

pub use build::CommandBuildRunner;
pub use git::Git2Provider;
pub use github_cli::GhCliReleaseHost;
pub use process::SystemAppLauncher;
pub use project::FileSystemProjectProvider;
pub use version_file::JsonVersionFileWriter;
