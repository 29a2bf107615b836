use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] devkit_operations::OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error(
        "`release` needs an interactive terminal ({reason}); set DEVKIT_FORCE_TTY=1 to override"
    )]
    NotInteractive { reason: String },
}

impl CliError {
    /// Whether the user interrupted a prompt, which ends the run cleanly.
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            Self::Operation(devkit_operations::OperationError::Interrupted)
        )
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
