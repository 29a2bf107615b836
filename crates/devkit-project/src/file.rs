//! On-disk shape of `devkit.toml`. Every key is optional.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub release: Option<ReleaseSection>,
    pub start: Option<StartSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ReleaseSection {
    pub branches: Option<Vec<String>>,
    pub manifest: Option<String>,
    pub package: Option<String>,
    pub changelog: Option<String>,
    pub build_command: Option<Vec<String>>,
    pub build_dir: Option<String>,
    pub remote: Option<String>,
    pub commit_message: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct StartSection {
    pub process_name: Option<String>,
    pub args: Option<Vec<String>>,
    pub debug_port: Option<u16>,
}
