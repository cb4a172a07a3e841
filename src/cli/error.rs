//! CLI-level errors (wraps parse and config errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::errors::ParseError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("{failed} file(s) failed structural checks")]
    ScanFailed { failed: usize },

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(e) => match e {
                ParseError::FileNotFound(_) => exitcode::NOINPUT,
                ParseError::Io(_) => exitcode::IOERR,
                _ => exitcode::DATAERR,
            },
            CliError::ScanFailed { .. } => exitcode::DATAERR,
            CliError::Settings(_) => exitcode::CONFIG,
            CliError::InvalidArgs(_) => exitcode::USAGE,
        }
    }
}
