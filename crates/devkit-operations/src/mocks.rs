use std::collections::{HashMap, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::Mutex;

use devkit_git::CommitInfo;
use devkit_project::Project;
use devkit_version::{BumpChoices, VersionError};
use semver::Version;

use crate::traits::{
    AppLauncher, BuildRunner, GitProvider, ProjectProvider, ReleaseHost, ReleaseInteraction,
    ReleaseRequest, VersionAction, VersionConfirmation, VersionFileWriter,
};
use crate::{OperationError, Result};

fn mock_failure(what: &str) -> OperationError {
    OperationError::CommandSpawn {
        command: what.to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "mock failure"),
    }
}

/// Exit status of a process that exited with code 1.
fn exit_failure() -> ExitStatus {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(1 << 8)
    }
    #[cfg(windows)]
    {
        use std::os::windows::process::ExitStatusExt;
        ExitStatus::from_raw(1)
    }
}

pub struct MockProjectProvider {
    project: Project,
}

impl MockProjectProvider {
    #[must_use]
    pub fn new(project: Project) -> Self {
        Self { project }
    }
}

impl ProjectProvider for MockProjectProvider {
    fn discover_project(&self, _start_path: &Path) -> Result<Project> {
        Ok(self.project.clone())
    }
}

/// A `None` branch makes `current_branch` fail.
pub struct MockGitProvider {
    branch: Option<String>,
    tags: Vec<String>,
    resets: Mutex<usize>,
    staged_files: Mutex<Vec<PathBuf>>,
    commits: Mutex<Vec<String>>,
    pushes: Mutex<Vec<(String, String)>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            branch: None,
            tags: Vec::new(),
            resets: Mutex::new(0),
            staged_files: Mutex::new(Vec::new()),
            commits: Mutex::new(Vec::new()),
            pushes: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_string());
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(ToString::to_string).collect();
        self
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn resets(&self) -> usize {
        *self.resets.lock().expect("lock poisoned")
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn staged_files(&self) -> Vec<PathBuf> {
        self.staged_files.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn commits(&self) -> Vec<String> {
        self.commits.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn pushes(&self) -> Vec<(String, String)> {
        self.pushes.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn current_branch(&self, _project_root: &Path) -> Result<String> {
        self.branch
            .clone()
            .ok_or(OperationError::Git(devkit_git::GitError::DetachedHead))
    }

    fn tags(&self, _project_root: &Path) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn reset_staged(&self, _project_root: &Path) -> Result<()> {
        *self.resets.lock().expect("lock poisoned") += 1;
        Ok(())
    }

    fn stage_files(&self, _project_root: &Path, paths: &[&Path]) -> Result<()> {
        self.staged_files
            .lock()
            .expect("lock poisoned")
            .extend(paths.iter().map(|p| p.to_path_buf()));
        Ok(())
    }

    fn commit(&self, _project_root: &Path, message: &str) -> Result<CommitInfo> {
        let mut commits = self.commits.lock().expect("lock poisoned");
        commits.push(message.to_string());
        Ok(CommitInfo {
            sha: format!("mock-sha-{}", commits.len()),
            message: message.to_string(),
        })
    }

    fn push(&self, _project_root: &Path, remote: &str, branch: &str) -> Result<()> {
        self.pushes
            .lock()
            .expect("lock poisoned")
            .push((remote.to_string(), branch.to_string()));
        Ok(())
    }
}

pub struct MockReleaseHost {
    tags: Vec<String>,
    url: Option<String>,
    fail: bool,
    created: Mutex<Vec<ReleaseRequest>>,
}

impl MockReleaseHost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tags: Vec::new(),
            url: None,
            fail: false,
            created: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Every call fails.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn created(&self) -> Vec<ReleaseRequest> {
        self.created.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockReleaseHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseHost for MockReleaseHost {
    fn release_tags(&self, _project_root: &Path) -> Result<Vec<String>> {
        if self.fail {
            return Err(mock_failure("gh release list"));
        }
        Ok(self.tags.clone())
    }

    fn repository_url(&self, _project_root: &Path) -> Result<String> {
        if self.fail {
            return Err(mock_failure("gh repo view"));
        }
        self.url.clone().ok_or_else(|| mock_failure("gh repo view"))
    }

    fn create_release(&self, _project_root: &Path, request: &ReleaseRequest) -> Result<()> {
        if self.fail {
            return Err(mock_failure("gh release create"));
        }
        self.created
            .lock()
            .expect("lock poisoned")
            .push(request.clone());
        Ok(())
    }
}

/// Writes the configured output files into `<root>/dist` on each run.
pub struct MockBuildRunner {
    output: Vec<String>,
    fail: bool,
    runs: Mutex<usize>,
}

impl MockBuildRunner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            fail: false,
            runs: Mutex::new(0),
        }
    }

    #[must_use]
    pub fn with_output(mut self, files: &[&str]) -> Self {
        self.output = files.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn runs(&self) -> usize {
        *self.runs.lock().expect("lock poisoned")
    }
}

impl Default for MockBuildRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildRunner for MockBuildRunner {
    fn run_build(&self, project_root: &Path, command: &[String]) -> Result<()> {
        *self.runs.lock().expect("lock poisoned") += 1;
        if self.fail {
            return Err(OperationError::BuildFailed {
                command: command.join(" "),
                status: exit_failure(),
            });
        }

        let dist = project_root.join("dist");
        fs::create_dir_all(&dist)?;
        for file in &self.output {
            fs::write(dist.join(file), "built")?;
        }
        Ok(())
    }
}

pub struct MockVersionFileWriter {
    versions: HashMap<PathBuf, Version>,
    fail_on: Option<PathBuf>,
    writes: Mutex<Vec<(PathBuf, Version)>>,
}

impl MockVersionFileWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            versions: HashMap::new(),
            fail_on: None,
            writes: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_version(mut self, path: PathBuf, version: Version) -> Self {
        self.versions.insert(path, version);
        self
    }

    #[must_use]
    pub fn failing_on(mut self, path: PathBuf) -> Self {
        self.fail_on = Some(path);
        self
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn writes(&self) -> Vec<(PathBuf, Version)> {
        self.writes.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockVersionFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionFileWriter for MockVersionFileWriter {
    fn read_version(&self, path: &Path) -> Result<Version> {
        self.versions.get(path).cloned().ok_or_else(|| {
            OperationError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock version for {}", path.display()),
            ))
        })
    }

    fn write_version(&self, path: &Path, version: &Version) -> Result<()> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(OperationError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock failure",
            )));
        }
        self.writes
            .lock()
            .expect("lock poisoned")
            .push((path.to_path_buf(), version.clone()));
        Ok(())
    }
}

/// Scripted answers; an exhausted script fails with `InteractionRequired`.
pub struct MockReleaseInteraction {
    actions: Mutex<VecDeque<VersionAction>>,
    inputs: Mutex<VecDeque<Option<String>>>,
    confirmations: Mutex<VecDeque<VersionConfirmation>>,
    git_confirmations: Mutex<VecDeque<bool>>,
    menu_prompts: Mutex<usize>,
    git_prompts: Mutex<usize>,
    shown_histories: Mutex<Vec<Vec<Version>>>,
    invalid_reports: Mutex<Vec<String>>,
    confirmed_versions: Mutex<Vec<Version>>,
}

impl MockReleaseInteraction {
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: Mutex::new(VecDeque::new()),
            inputs: Mutex::new(VecDeque::new()),
            confirmations: Mutex::new(VecDeque::new()),
            git_confirmations: Mutex::new(VecDeque::new()),
            menu_prompts: Mutex::new(0),
            git_prompts: Mutex::new(0),
            shown_histories: Mutex::new(Vec::new()),
            invalid_reports: Mutex::new(Vec::new()),
            confirmed_versions: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn with_actions(self, actions: &[VersionAction]) -> Self {
        self.actions
            .lock()
            .expect("lock poisoned")
            .extend(actions.iter().copied());
        self
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn with_inputs(self, inputs: &[&str]) -> Self {
        self.inputs
            .lock()
            .expect("lock poisoned")
            .extend(inputs.iter().map(|input| Some((*input).to_string())));
        self
    }

    /// The next manual entry prompt is dismissed.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn with_dismissed_input(self) -> Self {
        self.inputs.lock().expect("lock poisoned").push_back(None);
        self
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn with_confirmations(self, confirmations: &[VersionConfirmation]) -> Self {
        self.confirmations
            .lock()
            .expect("lock poisoned")
            .extend(confirmations.iter().copied());
        self
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn with_git_confirmations(self, answers: &[bool]) -> Self {
        self.git_confirmations
            .lock()
            .expect("lock poisoned")
            .extend(answers.iter().copied());
        self
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn menu_prompts(&self) -> usize {
        *self.menu_prompts.lock().expect("lock poisoned")
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn git_prompts(&self) -> usize {
        *self.git_prompts.lock().expect("lock poisoned")
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn history_shown(&self) -> usize {
        self.shown_histories.lock().expect("lock poisoned").len()
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn shown_histories(&self) -> Vec<Vec<Version>> {
        self.shown_histories.lock().expect("lock poisoned").clone()
    }

    /// Rendered messages of every rejected manual entry.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn invalid_reports(&self) -> Vec<String> {
        self.invalid_reports.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn confirmed_versions(&self) -> Vec<Version> {
        self.confirmed_versions.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockReleaseInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseInteraction for MockReleaseInteraction {
    fn select_version_action(
        &self,
        _current: &Version,
        _choices: &BumpChoices,
    ) -> Result<VersionAction> {
        *self.menu_prompts.lock().expect("lock poisoned") += 1;
        self.actions
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .ok_or(OperationError::InteractionRequired)
    }

    fn show_previous_versions(&self, versions: &[Version]) -> Result<()> {
        self.shown_histories
            .lock()
            .expect("lock poisoned")
            .push(versions.to_vec());
        Ok(())
    }

    fn input_version(&self) -> Result<Option<String>> {
        self.inputs
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .ok_or(OperationError::InteractionRequired)
    }

    fn report_invalid_version(&self, error: &VersionError) {
        self.invalid_reports
            .lock()
            .expect("lock poisoned")
            .push(error.to_string());
    }

    fn confirm_version(
        &self,
        version: &Version,
        _previous: Option<&Version>,
    ) -> Result<VersionConfirmation> {
        self.confirmed_versions
            .lock()
            .expect("lock poisoned")
            .push(version.clone());
        self.confirmations
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .ok_or(OperationError::InteractionRequired)
    }

    fn confirm_git_operations(&self, _version: &Version, _remote: &str) -> Result<bool> {
        *self.git_prompts.lock().expect("lock poisoned") += 1;
        self.git_confirmations
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .ok_or(OperationError::InteractionRequired)
    }
}

pub struct MockAppLauncher {
    running: Vec<String>,
    pid: u32,
    fail: bool,
    launches: Mutex<Vec<(PathBuf, Vec<String>)>>,
}

impl MockAppLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            running: Vec::new(),
            pid: 1,
            fail: false,
            launches: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_running(mut self, names: &[&str]) -> Self {
        self.running = names.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = pid;
        self
    }

    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn launches(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.launches.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockAppLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl AppLauncher for MockAppLauncher {
    fn is_running(&self, process_name: &str) -> bool {
        let wanted = process_name.to_lowercase();
        self.running
            .iter()
            .any(|name| name.to_lowercase().contains(&wanted))
    }

    fn launch(&self, program: &Path, args: &[String]) -> Result<u32> {
        if self.fail {
            return Err(OperationError::Launch {
                program: program.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "mock failure"),
            });
        }
        self.launches
            .lock()
            .expect("lock poisoned")
            .push((program.to_path_buf(), args.to_vec()));
        Ok(self.pid)
    }
}
