use std::fmt;
use std::io::IsTerminal;

const NO_TTY_ENV: &str = "DEVKIT_NO_TTY";
const FORCE_TTY_ENV: &str = "DEVKIT_FORCE_TTY";

/// Variables whose presence means the release is running unattended.
const CI_MARKERS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_URL"];

/// Why `release` cannot prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonInteractiveReason {
    Disabled,
    Ci { variable: &'static str },
    NoTerminal,
}

impl fmt::Display for NonInteractiveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "{NO_TTY_ENV} is set"),
            Self::Ci { variable } => {
                write!(f, "CI detected via {variable}; set {FORCE_TTY_ENV} to override")
            }
            Self::NoTerminal => write!(f, "stdin is not a terminal"),
        }
    }
}

/// `None` when the release prompts can be shown.
pub fn non_interactive_reason() -> Option<NonInteractiveReason> {
    detect(
        |name| std::env::var_os(name).is_some(),
        std::io::stdin().is_terminal(),
    )
}

fn detect(is_set: impl Fn(&str) -> bool, stdin_is_terminal: bool) -> Option<NonInteractiveReason> {
    if is_set(NO_TTY_ENV) {
        return Some(NonInteractiveReason::Disabled);
    }
    if is_set(FORCE_TTY_ENV) {
        return None;
    }
    if let Some(variable) = CI_MARKERS.iter().copied().find(|name| is_set(*name)) {
        return Some(NonInteractiveReason::Ci { variable });
    }
    if !stdin_is_terminal {
        return Some(NonInteractiveReason::NoTerminal);
    }
    None
}
