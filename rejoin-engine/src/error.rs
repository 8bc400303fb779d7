//! Layered error types
//!
//! Core failures are wrapped with the document they belong to; input and
//! configuration failures are produced here.

use rejoin_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A line does not have the delimiter structure reassembly requires
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number
        line: usize,
        /// What is wrong with the line
        reason: String,
    },

    /// Reassembly of one document hit a selector contract violation
    #[error("document {document} failed: {source}")]
    DegenerateSearch {
        /// 1-based document (line) number
        document: usize,
        /// The underlying core error
        #[source]
        source: CoreError,
    },

    /// Thread pool could not be created
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl EngineError {
    /// Document or line number the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            EngineError::MalformedInput { line, .. } => Some(*line),
            EngineError::DegenerateSearch { document, .. } => Some(*document),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_search_names_document() {
        let err = EngineError::DegenerateSearch {
            document: 12,
            source: CoreError::DegenerateSearch {
                head: 5,
                recipient: 0,
                len: 3,
            },
        };
        assert!(err.to_string().starts_with("document 12 failed: degenerate search"));
        assert_eq!(err.line(), Some(12));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_malformed_input_display() {
        let err = EngineError::MalformedInput {
            line: 3,
            reason: "expected at least two fragments".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed input on line 3: expected at least two fragments"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::IoError(msg) if msg.contains("gone")));
        assert_eq!(EngineError::ConfigError("x".into()).line(), None);
    }
}
