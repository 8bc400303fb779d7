//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::ExecutionMode;
use serde::{Deserialize, Serialize};

/// Default fragment delimiter
pub const DEFAULT_DELIMITER: char = ';';

/// What to emit for a document whose reassembly fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Emit nothing and report the failure
    #[default]
    Report,
    /// Roll back to the backup and emit the unmerged fragments
    RestoreOriginal,
    /// Emit whatever was merged before the failure
    KeepPartial,
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Character separating fragments within a line
    pub delimiter: char,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum number of documents for parallel processing
    pub parallel_threshold: usize,
    /// Handling of documents whose reassembly fails
    pub failure_policy: FailurePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 64,
            failure_policy: FailurePolicy::Report,
        }
    }
}

impl EngineConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX, // Never use parallel
            ..Self::default()
        }
    }

    /// Always run documents on the thread pool
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            parallel_threshold: 1,
            ..Self::default()
        }
    }

    /// Check the configuration for values the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if matches!(self.delimiter, '\n' | '\r') {
            return Err(EngineError::ConfigError(
                "delimiter cannot be a line break".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(EngineError::ConfigError(
                "parallel threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
