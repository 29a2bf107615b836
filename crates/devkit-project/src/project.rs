use std::path::{Path, PathBuf};

use crate::CONFIG_FILE;
use crate::config::{DevkitConfig, ReleaseConfig, load_config};
use crate::error::ProjectError;

const PACKAGE_FILE: &str = "package.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub root: PathBuf,
    pub config: DevkitConfig,
}

impl Project {
    #[must_use]
    pub fn new(root: PathBuf, config: DevkitConfig) -> Self {
        Self { root, config }
    }

    #[must_use]
    pub fn release_config(&self) -> &ReleaseConfig {
        self.config.release()
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(self.config.release().manifest())
    }

    #[must_use]
    pub fn package_path(&self) -> PathBuf {
        self.root.join(self.config.release().package())
    }

    #[must_use]
    pub fn changelog_path(&self) -> PathBuf {
        self.root.join(self.config.release().changelog())
    }

    #[must_use]
    pub fn build_dir(&self) -> PathBuf {
        self.root.join(self.config.release().build_dir())
    }
}

/// Walks up from `start_dir` to the nearest directory holding `devkit.toml`
/// or `package.json`, then loads its configuration.
///
/// # Errors
///
/// Returns `ProjectError` if no project root can be found or the config is invalid.
pub fn discover_project(start_dir: &Path) -> Result<Project, ProjectError> {
    let start_dir = start_dir.canonicalize().map_err(|_| ProjectError::NotFound {
        start_dir: start_dir.to_path_buf(),
    })?;

    let root = find_project_root(&start_dir)?;
    let config = load_config(&root)?;

    Ok(Project { root, config })
}

fn find_project_root(start_dir: &Path) -> Result<PathBuf, ProjectError> {
    start_dir
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE).is_file() || dir.join(PACKAGE_FILE).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| ProjectError::NotFound {
            start_dir: start_dir.to_path_buf(),
        })
}
