mod config;
mod error;
mod file;
mod project;

pub const CONFIG_FILE: &str = "devkit.toml";

pub use config::{DevkitConfig, ReleaseConfig, StartConfig, load_config, parse_config};
pub use error::ProjectError;
pub use project::{Project, discover_project};

pub type Result<T> = std::result::Result<T, ProjectError>;
