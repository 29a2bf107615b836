use semver::Version;

#[must_use]
pub fn comparison_url(repo_url: &str, base: &Version, target: &Version) -> String {
    format!("{}/compare/{base}...{target}", repo_url.trim_end_matches('/'))
}

/// Builds the release body: the changelog section, followed by a
/// "Full Changelog" comparison link when both a repository URL and a
/// previous version are known.
#[must_use]
pub fn compose_release_notes(
    section: &str,
    repo_url: Option<&str>,
    previous: Option<&Version>,
    version: &Version,
) -> String {
    match (repo_url, previous) {
        (Some(url), Some(previous)) => format!(
            "{section}\n\n**Full Changelog**: {}",
            comparison_url(url, previous, version)
        ),
        _ => section.to_string(),
    }
}
