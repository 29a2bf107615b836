use std::path::{Path, PathBuf};

use crate::error::ProjectError;
use crate::file::{ConfigFile, ReleaseSection, StartSection};

pub const VERSION_PLACEHOLDER: &str = "{version}";
pub const DEFAULT_DEBUG_PORT: u16 = 9222;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    branches: Vec<String>,
    manifest: PathBuf,
    package: PathBuf,
    changelog: PathBuf,
    build_command: Vec<String>,
    build_dir: PathBuf,
    remote: String,
    commit_message: String,
    title: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            branches: vec!["main".to_string(), "master".to_string()],
            manifest: PathBuf::from("manifest.json"),
            package: PathBuf::from("package.json"),
            changelog: PathBuf::from("CHANGELOG.md"),
            build_command: vec!["npm".to_string(), "run".to_string(), "build".to_string()],
            build_dir: PathBuf::from("dist"),
            remote: "origin".to_string(),
            commit_message: format!("release: {VERSION_PLACEHOLDER}"),
            title: VERSION_PLACEHOLDER.to_string(),
        }
    }
}

impl ReleaseConfig {
    #[must_use]
    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    #[must_use]
    pub fn is_release_branch(&self, branch: &str) -> bool {
        self.branches.iter().any(|b| b == branch)
    }

    #[must_use]
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    #[must_use]
    pub fn package(&self) -> &Path {
        &self.package
    }

    #[must_use]
    pub fn changelog(&self) -> &Path {
        &self.changelog
    }

    #[must_use]
    pub fn build_command(&self) -> &[String] {
        &self.build_command
    }

    #[must_use]
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    #[must_use]
    pub fn remote(&self) -> &str {
        &self.remote
    }

    #[must_use]
    pub fn commit_message(&self, version: &str) -> String {
        self.commit_message.replace(VERSION_PLACEHOLDER, version)
    }

    #[must_use]
    pub fn title(&self, version: &str) -> String {
        self.title.replace(VERSION_PLACEHOLDER, version)
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_branches(mut self, branches: &[&str]) -> Self {
        self.branches = branches.iter().map(ToString::to_string).collect();
        self
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_build_command(mut self, command: &[&str]) -> Self {
        self.build_command = command.iter().map(ToString::to_string).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartConfig {
    process_name: Option<String>,
    args: Vec<String>,
    debug_port: u16,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            process_name: None,
            args: Vec::new(),
            debug_port: DEFAULT_DEBUG_PORT,
        }
    }
}

impl StartConfig {
    #[must_use]
    pub fn process_name(&self) -> Option<&str> {
        self.process_name.as_deref()
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn debug_port(&self) -> u16 {
        self.debug_port
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevkitConfig {
    release: ReleaseConfig,
    start: StartConfig,
}

impl DevkitConfig {
    #[must_use]
    pub fn release(&self) -> &ReleaseConfig {
        &self.release
    }

    #[must_use]
    pub fn start(&self) -> &StartConfig {
        &self.start
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_release(mut self, release: ReleaseConfig) -> Self {
        self.release = release;
        self
    }
}

/// Loads `devkit.toml` from `root`, falling back to defaults when absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is invalid.
pub fn load_config(root: &Path) -> Result<DevkitConfig, ProjectError> {
    let path = root.join(crate::CONFIG_FILE);
    if !path.exists() {
        return Ok(DevkitConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ProjectError::ConfigRead {
        path: path.clone(),
        source,
    })?;

    parse_config(&path, &content)
}

/// # Errors
///
/// Returns an error if the content is not valid TOML, has unknown keys,
/// or holds values that cannot drive a release.
pub fn parse_config(path: &Path, content: &str) -> Result<DevkitConfig, ProjectError> {
    let file: ConfigFile = toml::from_str(content).map_err(|source| ProjectError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(DevkitConfig {
        release: release_config(path, file.release.unwrap_or_default())?,
        start: start_config(file.start.unwrap_or_default()),
    })
}

fn release_config(path: &Path, section: ReleaseSection) -> Result<ReleaseConfig, ProjectError> {
    let defaults = ReleaseConfig::default();

    let branches = section.branches.unwrap_or(defaults.branches);
    if branches.is_empty() {
        return Err(ProjectError::InvalidField {
            path: path.to_path_buf(),
            field: "release.branches",
            reason: "at least one release branch is required",
        });
    }

    let build_command = section.build_command.unwrap_or(defaults.build_command);
    if build_command.is_empty() {
        return Err(ProjectError::InvalidField {
            path: path.to_path_buf(),
            field: "release.build_command",
            reason: "the build command needs a program",
        });
    }

    Ok(ReleaseConfig {
        branches,
        manifest: section.manifest.map_or(defaults.manifest, PathBuf::from),
        package: section.package.map_or(defaults.package, PathBuf::from),
        changelog: section.changelog.map_or(defaults.changelog, PathBuf::from),
        build_command,
        build_dir: section.build_dir.map_or(defaults.build_dir, PathBuf::from),
        remote: section.remote.unwrap_or(defaults.remote),
        commit_message: section.commit_message.unwrap_or(defaults.commit_message),
        title: section.title.unwrap_or(defaults.title),
    })
}

fn start_config(section: StartSection) -> StartConfig {
    StartConfig {
        process_name: section.process_name,
        args: section.args.unwrap_or_default(),
        debug_port: section.debug_port.unwrap_or(DEFAULT_DEBUG_PORT),
    }
}
