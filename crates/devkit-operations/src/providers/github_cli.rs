use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use tracing::debug;

use crate::traits::{ReleaseHost, ReleaseRequest};
use crate::{OperationError, Result};

const GH: &str = "gh";
const RELEASE_LIST_LIMIT: &str = "1000";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReleaseListEntry {
    tag_name: String,
}

#[derive(Debug, Deserialize)]
struct RepositoryView {
    url: String,
}

/// Publishes releases through the GitHub CLI.
pub struct GhCliReleaseHost;

impl GhCliReleaseHost {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for GhCliReleaseHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseHost for GhCliReleaseHost {
    fn release_tags(&self, project_root: &Path) -> Result<Vec<String>> {
        let args = [
            "release",
            "list",
            "--limit",
            RELEASE_LIST_LIMIT,
            "--json",
            "tagName",
        ];
        let stdout = run_gh(project_root, &args)?;
        parse_release_tags(&stdout).map_err(|source| OperationError::UnexpectedOutput {
            command: describe(&args),
            source,
        })
    }

    fn repository_url(&self, project_root: &Path) -> Result<String> {
        let args = ["repo", "view", "--json", "url"];
        let stdout = run_gh(project_root, &args)?;
        parse_repository_url(&stdout).map_err(|source| OperationError::UnexpectedOutput {
            command: describe(&args),
            source,
        })
    }

    fn create_release(&self, project_root: &Path, request: &ReleaseRequest) -> Result<()> {
        let args = release_create_args(request)?;
        run_gh(project_root, &args)?;
        Ok(())
    }
}

fn release_create_args(request: &ReleaseRequest) -> Result<Vec<String>> {
    let mut args = vec![
        "release".to_string(),
        "create".to_string(),
        request.tag.clone(),
    ];
    if let Some(target) = &request.target {
        args.push("--target".to_string());
        args.push(target.clone());
    }
    args.extend([
        "--title".to_string(),
        request.title.clone(),
        "--notes".to_string(),
        request.notes.clone(),
    ]);

    for asset in &request.assets {
        let asset = asset.to_string_lossy();
        // gh splits `path#label` on the first '#'.
        if asset.contains('#') {
            return Err(OperationError::UnsupportedAssetPath {
                path: PathBuf::from(asset.as_ref()),
            });
        }
        args.push(asset.into_owned());
    }

    Ok(args)
}

fn describe<S: AsRef<str>>(args: &[S]) -> String {
    let mut command = GH.to_string();
    for arg in args {
        command.push(' ');
        command.push_str(arg.as_ref());
    }
    command
}

fn run_gh<S: AsRef<str>>(project_root: &Path, args: &[S]) -> Result<String> {
    let command = describe(&args[..args.len().min(2)]);
    debug!(root = %project_root.display(), "{command}");

    let output = Command::new(GH)
        .args(args.iter().map(AsRef::as_ref))
        .current_dir(project_root)
        .output()
        .map_err(|source| OperationError::CommandSpawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(OperationError::CommandFailed {
            command,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn parse_release_tags(json: &str) -> serde_json::Result<Vec<String>> {
    let entries: Vec<ReleaseListEntry> = serde_json::from_str(json)?;
    Ok(entries.into_iter().map(|entry| entry.tag_name).collect())
}

fn parse_repository_url(json: &str) -> serde_json::Result<String> {
    let view: RepositoryView = serde_json::from_str(json)?;
    Ok(view.url)
}
