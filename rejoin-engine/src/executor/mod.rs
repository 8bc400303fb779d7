//! Execution strategies for document batches
//!
//! Every document is reassembled independently, so a batch can be spread
//! over a thread pool without coordination. Reports always come back in
//! submission order.

use crate::error::Result;
use crate::input::Document;
use crate::report::DocumentReport;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// One document per task on a thread pool
    Parallel,
    /// Pick by batch size, see [`auto_select`]
    #[default]
    Adaptive,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Apply `reassemble` to every document, keeping submission order
    fn run<F>(&self, documents: &[Document], reassemble: F) -> Result<Vec<DocumentReport>>
    where
        F: Fn(&Document) -> DocumentReport + Send + Sync;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on the number of documents
pub fn auto_select(document_count: usize, threshold: usize) -> ExecutionMode {
    if document_count < 2 || document_count < threshold {
        // Nothing to spread out, or the pool would cost more than it saves
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
