//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// A line without the required delimiter structure
    MalformedInput {
        /// File the line came from
        path: String,
        /// 1-based line number
        line: usize,
        /// What is wrong with the line
        reason: String,
    },
    /// Some documents could not be reassembled
    ReassemblyFailed {
        /// Documents that failed
        failed: usize,
        /// Documents processed
        total: usize,
    },
}

impl CliError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ReassemblyFailed { .. } => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MalformedInput { path, line, reason } => {
                write!(f, "Malformed input in {path} on line {line}: {reason}")
            }
            CliError::ReassemblyFailed { failed, total } => {
                write!(f, "Reassembly failed for {failed} of {total} documents")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Exit status for an error returned by a command
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map_or(1, CliError::exit_code)
}
