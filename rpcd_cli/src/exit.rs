//! Exit codes and the usage errors that map to them.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use rpcd::ArgumentError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    NoCommand = 1,
    UnknownCommand = 4,
    UnknownListTarget = 5,
    MissingListTarget = 6,
    MissingCommandName = 7,
    ArgumentMissingKey = 8,
    RunMissingCommand = 9,
    RequestError = 10,
    InvalidArgument = 11,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("No command given.")]
    NoCommand,
    #[error("Command {0} unknown.")]
    UnknownCommand(String),
    #[error("Unknown list command {0}.")]
    UnknownListTarget(String),
    #[error("list needs an argument (commands or layouts).")]
    MissingListTarget,
    #[error("Missing command name.")]
    MissingCommandName,
    #[error("Missing layout name.")]
    MissingLayoutName,
    #[error("Missing frame id.")]
    MissingFrame,
    #[error("What command should be run.")]
    RunMissingCommand,
    #[error("No such command: {0}")]
    NoSuchCommand(String),
}

impl UsageError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            UsageError::NoCommand => ExitCode::NoCommand,
            UsageError::UnknownCommand(_) => ExitCode::UnknownCommand,
            UsageError::UnknownListTarget(_) => ExitCode::UnknownListTarget,
            UsageError::MissingListTarget => ExitCode::MissingListTarget,
            UsageError::MissingCommandName | UsageError::MissingLayoutName | UsageError::MissingFrame => {
                ExitCode::MissingCommandName
            }
            UsageError::RunMissingCommand | UsageError::NoSuchCommand(_) => ExitCode::RunMissingCommand,
        }
    }

    /// Parse failures clap reports that have a dedicated exit code.
    /// Anything else keeps clap's own handling.
    pub fn from_clap(err: &clap::Error) -> Option<Self> {
        match err.kind() {
            ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Some(UsageError::NoCommand)
            }
            ErrorKind::InvalidSubcommand => {
                let name = match err.get(ContextKind::InvalidSubcommand) {
                    Some(ContextValue::String(name)) => name.clone(),
                    _ => String::new(),
                };
                Some(UsageError::UnknownCommand(name))
            }
            _ => None,
        }
    }
}

/// Exit code for a failed invocation.
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if let Some(usage) = err.downcast_ref::<UsageError>() {
        return usage.exit_code();
    }
    match err.downcast_ref::<ArgumentError>() {
        Some(ArgumentError::MalformedPair(_)) => ExitCode::ArgumentMissingKey,
        Some(ArgumentError::OutOfRange { .. }) => ExitCode::InvalidArgument,
        None => ExitCode::RequestError,
    }
}
