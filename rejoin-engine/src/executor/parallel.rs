//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
    input::Document,
    report::DocumentReport,
};
use rayon::prelude::*;

/// Parallel multi-threaded executor
///
/// Uses the global rayon pool unless a thread count is given, in which case
/// a dedicated pool is built for each batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelExecutor {
    threads: Option<usize>,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }

    /// Worker count this executor will use
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}

impl Executor for ParallelExecutor {
    fn run<F>(&self, documents: &[Document], reassemble: F) -> Result<Vec<DocumentReport>>
    where
        F: Fn(&Document) -> DocumentReport + Send + Sync,
    {
        log::debug!(
            "spreading {} documents over {} workers",
            documents.len(),
            self.thread_count()
        );
        match self.threads {
            None => Ok(documents.par_iter().map(&reassemble).collect()),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?;
                Ok(pool.install(|| documents.par_iter().map(&reassemble).collect()))
            }
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
