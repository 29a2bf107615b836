use std::fs;
use std::path::{Path, PathBuf};

use devkit_changelog::{Changelog, compose_release_notes};
use devkit_git::CommitInfo;
use devkit_project::Project;
use devkit_version::{parse_tag_version, sorted_versions};
use semver::Version;
use tracing::{debug, info, warn};

use super::assets::collect_assets;
use super::context::{ReleaseContext, ReleaseInput};
use crate::Result;
use crate::error::OperationError;
use crate::operations::VersionResolver;
use crate::traits::{
    BuildRunner, GitProvider, ProjectProvider, ReleaseHost, ReleaseInteraction, ReleaseRequest,
    VersionConfirmation, VersionFileWriter,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSummary {
    pub version: Version,
    pub previous_version: Option<Version>,
    pub branch: Option<String>,
    pub commit: Option<CommitInfo>,
    pub notes: String,
    pub assets: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Published(ReleaseSummary),
    DryRun(ReleaseSummary),
    /// The user declined at a prompt.
    Aborted,
    /// The changelog has no section for the chosen version.
    ChangelogMissing { version: Version, changelog: PathBuf },
}

/// Release progress carried between states after the changelog check.
#[derive(Debug, Clone)]
struct Release {
    context: ReleaseContext,
    section: String,
    branch: Option<String>,
    commit: Option<CommitInfo>,
    notes: String,
    assets: Vec<PathBuf>,
}

impl Release {
    fn new(context: ReleaseContext, section: String) -> Self {
        Self {
            context,
            section,
            branch: None,
            commit: None,
            notes: String::new(),
            assets: Vec::new(),
        }
    }

    fn dry_run(&self) -> bool {
        self.context.dry_run
    }

    fn into_summary(self) -> ReleaseSummary {
        ReleaseSummary {
            version: self.context.version,
            previous_version: self.context.previous_version,
            branch: self.branch,
            commit: self.commit,
            notes: self.notes,
            assets: self.assets,
        }
    }
}

#[derive(Debug)]
enum ReleaseState {
    SelectVersion,
    ConfirmVersion(Version),
    ValidateChangelog(ReleaseContext),
    UpdateVersionFiles(Release),
    ConfirmGitOps(Release),
    VerifyBranch(Release),
    CommitAndPush(Release),
    Build(Release),
    PublishRelease(Release),
    Done(Release),
}

enum Step {
    Continue(ReleaseState),
    Finish(ReleaseOutcome),
}

/// Downgrades a failure to a warning when nothing will be mutated anyway.
fn tolerate<T>(dry_run: bool, what: &str, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if dry_run => {
            warn!("[dry-run] {what} failed: {err}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

pub struct ReleaseOperation<P, G, H, B, V, I> {
    project_provider: P,
    git_provider: G,
    release_host: H,
    build_runner: B,
    version_files: V,
    interaction: I,
}

#[cfg(test)]
impl<P, G, H, B, V, I> ReleaseOperation<P, G, H, B, V, I> {
    pub(crate) fn git_provider(&self) -> &G {
        &self.git_provider
    }

    pub(crate) fn release_host(&self) -> &H {
        &self.release_host
    }

    pub(crate) fn build_runner(&self) -> &B {
        &self.build_runner
    }

    pub(crate) fn version_files(&self) -> &V {
        &self.version_files
    }

    pub(crate) fn interaction(&self) -> &I {
        &self.interaction
    }
}

impl<P, G, H, B, V, I> ReleaseOperation<P, G, H, B, V, I>
where
    P: ProjectProvider,
    G: GitProvider,
    H: ReleaseHost,
    B: BuildRunner,
    V: VersionFileWriter,
    I: ReleaseInteraction,
{
    pub fn new(
        project_provider: P,
        git_provider: G,
        release_host: H,
        build_runner: B,
        version_files: V,
        interaction: I,
    ) -> Self {
        Self {
            project_provider,
            git_provider,
            release_host,
            build_runner,
            version_files,
            interaction,
        }
    }

    /// Runs the release state machine for the project containing `start_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if a step fails outside dry-run, or if a prompt or
    /// changelog read fails in either mode.
    pub fn execute(&self, start_path: &Path, input: &ReleaseInput) -> Result<ReleaseOutcome> {
        let project = self.project_provider.discover_project(start_path)?;
        debug!(root = %project.root.display(), dry_run = input.dry_run, "starting release");

        let history = self.load_history(&project, input.dry_run)?;
        let mut state = ReleaseState::SelectVersion;

        loop {
            debug!(?state, "release state");
            let step = match state {
                ReleaseState::SelectVersion => self.select_version(&history)?,
                ReleaseState::ConfirmVersion(version) => {
                    self.confirm_version(version, &history, input)?
                }
                ReleaseState::ValidateChangelog(context) => {
                    Self::validate_changelog(&project, context)?
                }
                ReleaseState::UpdateVersionFiles(release) => {
                    self.update_version_files(&project, release)?
                }
                ReleaseState::ConfirmGitOps(release) => {
                    self.confirm_git_operations(&project, release)?
                }
                ReleaseState::VerifyBranch(release) => self.verify_branch(&project, release)?,
                ReleaseState::CommitAndPush(release) => self.commit_and_push(&project, release)?,
                ReleaseState::Build(release) => self.build(&project, release)?,
                ReleaseState::PublishRelease(release) => self.publish(&project, release)?,
                ReleaseState::Done(release) => {
                    let outcome = if release.dry_run() {
                        ReleaseOutcome::DryRun(release.into_summary())
                    } else {
                        ReleaseOutcome::Published(release.into_summary())
                    };
                    Step::Finish(outcome)
                }
            };

            state = match step {
                Step::Continue(next) => next,
                Step::Finish(outcome) => return Ok(outcome),
            };
        }
    }

    /// Published release tags merged with local git tags, ascending.
    fn load_history(&self, project: &Project, dry_run: bool) -> Result<Vec<Version>> {
        let host_tags = tolerate(
            dry_run,
            "listing published releases",
            self.release_host.release_tags(&project.root),
        )?
        .unwrap_or_default();
        let git_tags = tolerate(
            dry_run,
            "listing git tags",
            self.git_provider.tags(&project.root),
        )?
        .unwrap_or_default();

        let versions = sorted_versions(
            host_tags
                .iter()
                .chain(git_tags.iter())
                .filter_map(|tag| parse_tag_version(tag)),
        );
        debug!(count = versions.len(), "loaded release history");
        Ok(versions)
    }

    fn select_version(&self, history: &[Version]) -> Result<Step> {
        let resolver = VersionResolver::new(&self.interaction);
        match resolver.resolve(history, history.last())? {
            Some(version) => Ok(Step::Continue(ReleaseState::ConfirmVersion(version))),
            None => {
                info!("no version selected; release aborted");
                Ok(Step::Finish(ReleaseOutcome::Aborted))
            }
        }
    }

    fn confirm_version(
        &self,
        version: Version,
        history: &[Version],
        input: &ReleaseInput,
    ) -> Result<Step> {
        let previous = history.last();
        match self.interaction.confirm_version(&version, previous)? {
            VersionConfirmation::Proceed => {
                let context = ReleaseContext::new(version, previous.cloned(), input);
                Ok(Step::Continue(ReleaseState::ValidateChangelog(context)))
            }
            VersionConfirmation::Retry => Ok(Step::Continue(ReleaseState::SelectVersion)),
            VersionConfirmation::Abort => {
                info!("release aborted");
                Ok(Step::Finish(ReleaseOutcome::Aborted))
            }
        }
    }

    fn validate_changelog(project: &Project, context: ReleaseContext) -> Result<Step> {
        let path = project.changelog_path();
        let section = if path.exists() {
            Changelog::from_file(&path)?.section(&context.version)?
        } else {
            None
        };

        let Some(section) = section else {
            warn!(
                changelog = %path.display(),
                "no changelog section for {}; add one and re-run the release",
                context.version
            );
            return Ok(Step::Finish(ReleaseOutcome::ChangelogMissing {
                version: context.version,
                changelog: path,
            }));
        };

        debug!(bytes = section.len(), "found changelog section");
        Ok(Step::Continue(ReleaseState::UpdateVersionFiles(
            Release::new(context, section),
        )))
    }

    fn update_version_files(&self, project: &Project, release: Release) -> Result<Step> {
        let version = &release.context.version;

        for path in [project.manifest_path(), project.package_path()] {
            if release.dry_run() {
                match self.version_files.read_version(&path) {
                    Ok(current) => info!(
                        "[dry-run] would update {}: {current} -> {version}",
                        path.display()
                    ),
                    Err(err) => warn!("[dry-run] reading {} failed: {err}", path.display()),
                }
            } else {
                self.version_files.write_version(&path, version)?;
                info!("updated {} to {version}", path.display());
            }
        }

        Ok(Step::Continue(ReleaseState::ConfirmGitOps(release)))
    }

    fn confirm_git_operations(&self, project: &Project, release: Release) -> Result<Step> {
        if release.dry_run() {
            return Ok(Step::Continue(ReleaseState::VerifyBranch(release)));
        }

        let remote = project.release_config().remote();
        if self
            .interaction
            .confirm_git_operations(&release.context.version, remote)?
        {
            Ok(Step::Continue(ReleaseState::VerifyBranch(release)))
        } else {
            info!("release stopped before git operations; version files keep their new version");
            Ok(Step::Finish(ReleaseOutcome::Aborted))
        }
    }

    fn verify_branch(&self, project: &Project, mut release: Release) -> Result<Step> {
        let dry_run = release.dry_run();
        let config = project.release_config();
        let branch = tolerate(
            dry_run,
            "reading the current branch",
            self.git_provider.current_branch(&project.root),
        )?;

        if let Some(branch) = &branch {
            if !config.is_release_branch(branch) {
                let err = OperationError::BranchNotAllowed {
                    branch: branch.clone(),
                    allowed: config.branches().to_vec(),
                };
                if !dry_run {
                    return Err(err);
                }
                warn!("[dry-run] {err}");
            }
        }

        release.branch = branch;
        Ok(Step::Continue(ReleaseState::CommitAndPush(release)))
    }

    fn commit_and_push(&self, project: &Project, mut release: Release) -> Result<Step> {
        let config = project.release_config();
        let manifest = project.manifest_path();
        let package = project.package_path();
        let message = config.commit_message(&release.context.tag());
        let remote = config.remote();

        if release.dry_run() {
            info!("[dry-run] would reset staged changes");
            info!(
                "[dry-run] would stage {} and {}",
                manifest.display(),
                package.display()
            );
            info!("[dry-run] would commit \"{message}\"");
            info!(
                "[dry-run] would push {remote} {}",
                release.branch.as_deref().unwrap_or("<unknown branch>")
            );
            return Ok(Step::Continue(ReleaseState::Build(release)));
        }

        let branch = release.branch.clone().ok_or(OperationError::BranchUnknown)?;
        self.git_provider.reset_staged(&project.root)?;
        self.git_provider
            .stage_files(&project.root, &[manifest.as_path(), package.as_path()])?;
        let commit = self.git_provider.commit(&project.root, &message)?;
        info!(sha = %commit.sha, "committed \"{message}\"");
        self.git_provider.push(&project.root, remote, &branch)?;
        info!("pushed {branch} to {remote}");

        release.commit = Some(commit);
        Ok(Step::Continue(ReleaseState::Build(release)))
    }

    fn build(&self, project: &Project, release: Release) -> Result<Step> {
        let dry_run = release.dry_run();
        let build_dir = project.build_dir();
        let command = project.release_config().build_command();

        if build_dir.exists() {
            debug!(dir = %build_dir.display(), "clearing previous build output");
            tolerate(
                dry_run,
                "clearing the build directory",
                fs::remove_dir_all(&build_dir).map_err(OperationError::from),
            )?;
        }

        info!("building with `{}`", command.join(" "));
        tolerate(
            dry_run,
            "the build",
            self.build_runner.run_build(&project.root, command),
        )?;

        Ok(Step::Continue(ReleaseState::PublishRelease(release)))
    }

    fn publish(&self, project: &Project, mut release: Release) -> Result<Step> {
        let dry_run = release.dry_run();
        let context = &release.context;

        let repo_url = tolerate(
            dry_run,
            "reading the repository URL",
            self.release_host.repository_url(&project.root),
        )?;
        let notes = compose_release_notes(
            &release.section,
            repo_url.as_deref(),
            context.previous_version.as_ref(),
            &context.version,
        );
        let assets = tolerate(
            dry_run,
            "collecting release assets",
            collect_assets(&project.build_dir()),
        )?
        .unwrap_or_default();

        let request = ReleaseRequest {
            tag: context.tag(),
            target: release.branch.clone(),
            title: project.release_config().title(&context.tag()),
            notes,
            assets,
        };

        if dry_run {
            info!(
                "[dry-run] would publish release {} titled \"{}\" with {} asset(s)",
                request.tag,
                request.title,
                request.assets.len()
            );
            for asset in &request.assets {
                info!("[dry-run]   asset {}", asset.display());
            }
            for line in request.notes.lines() {
                info!("[dry-run] | {line}");
            }
        } else {
            self.release_host.create_release(&project.root, &request)?;
            info!("published release {}", request.tag);
        }

        release.notes = request.notes;
        release.assets = request.assets;
        Ok(Step::Continue(ReleaseState::Done(release)))
    }
}
