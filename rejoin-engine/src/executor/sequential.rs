//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
    input::Document,
    report::DocumentReport,
};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn run<F>(&self, documents: &[Document], reassemble: F) -> Result<Vec<DocumentReport>>
    where
        F: Fn(&Document) -> DocumentReport + Send + Sync,
    {
        Ok(documents.iter().map(reassemble).collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
