//! Batch reassembler and builder
//!
//! Every document gets its own [`Composer`]: the backup is written, the
//! collection is reassembled, and the configured [`FailurePolicy`] decides
//! what text survives a selector failure.

use crate::{
    config::{EngineConfig, FailurePolicy},
    error::{EngineError, Result},
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
    input::{parse_line, Document, DocumentSet, Input},
    report::{BatchSummary, DocumentReport, DocumentStatus},
};
use rejoin_core::{Composer, MaximalOverlapSelector, Outcome, OverlapSplicer, PairSelector, Splicer};
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Reassembles batches of shredded documents
#[derive(Debug, Clone)]
pub struct Reassembler<S = MaximalOverlapSelector, M = OverlapSplicer> {
    config: EngineConfig,
    selector: S,
    splicer: M,
}

/// Reports for a whole batch, in input order
#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// One report per document
    pub reports: Vec<DocumentReport>,
    /// Counts over the reports
    pub summary: BatchSummary,
    /// Execution mode that was actually used
    pub mode: ExecutionMode,
    /// Wall-clock time spent reassembling
    pub elapsed: Duration,
}

impl BatchOutput {
    /// Output text of every document that produced one
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.reports.iter().filter_map(|r| r.text.as_deref())
    }

    /// Turn the first failed document into an error
    pub fn into_result(self) -> Result<Vec<DocumentReport>> {
        let failure = self
            .reports
            .iter()
            .find_map(|r| r.error.clone().map(|source| (r.number, source)));
        match failure {
            Some((document, source)) => Err(EngineError::DegenerateSearch { document, source }),
            None => Ok(self.reports),
        }
    }
}

impl Reassembler {
    /// Create a reassembler with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a reassembler with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Self::with_strategies(config, MaximalOverlapSelector, OverlapSplicer)
    }

    /// Start a builder
    pub fn builder() -> ReassemblerBuilder {
        ReassemblerBuilder::new()
    }
}

impl<S, M> Reassembler<S, M>
where
    S: PairSelector + Clone + Send + Sync,
    M: Splicer + Clone + Send + Sync,
{
    /// Create a reassembler with custom strategies
    pub fn with_strategies(config: EngineConfig, selector: S, splicer: M) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            selector,
            splicer,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read, validate and reassemble every line of `input`
    pub fn process(&self, input: Input) -> Result<BatchOutput> {
        let text = input.to_text()?;
        self.process_text(&text)
    }

    /// Validate and reassemble every line of `text`
    pub fn process_text(&self, text: &str) -> Result<BatchOutput> {
        let documents = DocumentSet::parse(text, self.config.delimiter)?;
        self.process_documents(&documents)
    }

    /// Reassemble an already validated set of documents
    pub fn process_documents(&self, documents: &DocumentSet) -> Result<BatchOutput> {
        let start = Instant::now();
        let mode = self.select_mode(documents.len());
        log::debug!("reassembling {} documents ({mode:?})", documents.len());

        let reassemble = |document: &Document| self.reassemble_document(document);
        let (reports, mode) = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => {
                let executor = ParallelExecutor::new(self.config.threads);
                (executor.run(documents.documents(), reassemble)?, executor.mode())
            }
            _ => (
                SequentialExecutor.run(documents.documents(), reassemble)?,
                SequentialExecutor.mode(),
            ),
        };

        let summary = BatchSummary::from_reports(&reports);
        let elapsed = start.elapsed();
        log::info!(
            "{} documents: {} done, {} stalled, {} failed in {:.2?}",
            summary.documents,
            summary.done,
            summary.stalled,
            summary.failed,
            elapsed
        );

        Ok(BatchOutput {
            reports,
            summary,
            mode,
            elapsed,
        })
    }

    /// Validate and reassemble a single line
    pub fn reassemble_line(&self, line: &str) -> Result<DocumentReport> {
        let document = parse_line(line, 1, self.config.delimiter)?;
        Ok(self.reassemble_document(&document))
    }

    /// Reassemble one document, applying the failure policy
    pub fn reassemble_document(&self, document: &Document) -> DocumentReport {
        let mut composer = Composer::from_texts(
            self.selector.clone(),
            self.splicer.clone(),
            document.fragments.iter().cloned(),
        );
        composer.write_backup();
        let fragments_in = composer.len();

        match composer.reassemble() {
            Ok(outcome) => {
                if let Outcome::Stalled { remaining, .. } = outcome {
                    log::debug!(
                        "document {} stalled with {remaining} fragments left",
                        document.number
                    );
                }
                DocumentReport {
                    number: document.number,
                    status: DocumentStatus::from(outcome),
                    fragments_in,
                    fragments_out: composer.len(),
                    merges: outcome.merges(),
                    text: Some(composer.to_text()),
                    error: None,
                }
            }
            Err(error) => {
                log::warn!("document {}: {error}", document.number);
                // Every merge removes exactly one fragment
                let merges = fragments_in.saturating_sub(composer.len());
                let text = match self.config.failure_policy {
                    FailurePolicy::Report => None,
                    FailurePolicy::RestoreOriginal => {
                        composer.restore_backup();
                        Some(composer.to_text())
                    }
                    FailurePolicy::KeepPartial => Some(composer.to_text()),
                };
                DocumentReport {
                    number: document.number,
                    status: DocumentStatus::Failed,
                    fragments_in,
                    fragments_out: composer.len(),
                    merges,
                    text,
                    error: Some(error),
                }
            }
        }
    }

    fn select_mode(&self, document_count: usize) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Sequential => ExecutionMode::Sequential,
            ExecutionMode::Adaptive => {
                auto_select(document_count, self.config.parallel_threshold)
            }
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => ExecutionMode::Parallel,
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                log::warn!("parallel feature disabled, running sequentially");
                ExecutionMode::Sequential
            }
        }
    }
}

/// Builder for [`Reassembler`]
///
/// Provides a fluent interface for configuring the reassembler.
#[derive(Debug, Clone)]
pub struct ReassemblerBuilder<S = MaximalOverlapSelector, M = OverlapSplicer> {
    config: EngineConfig,
    selector: S,
    splicer: M,
}

impl Default for ReassemblerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReassemblerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            selector: MaximalOverlapSelector,
            splicer: OverlapSplicer,
        }
    }
}

impl<S, M> ReassemblerBuilder<S, M>
where
    S: PairSelector + Clone + Send + Sync,
    M: Splicer + Clone + Send + Sync,
{
    /// Replace the whole configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the fragment delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the document count at which adaptive mode goes parallel
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Set the failure policy
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    /// Use a different pair selector
    pub fn selector<S2>(self, selector: S2) -> ReassemblerBuilder<S2, M>
    where
        S2: PairSelector + Clone + Send + Sync,
    {
        ReassemblerBuilder {
            config: self.config,
            selector,
            splicer: self.splicer,
        }
    }

    /// Use a different splicer
    pub fn splicer<M2>(self, splicer: M2) -> ReassemblerBuilder<S, M2>
    where
        M2: Splicer + Clone + Send + Sync,
    {
        ReassemblerBuilder {
            config: self.config,
            selector: self.selector,
            splicer,
        }
    }

    /// Build the reassembler
    pub fn build(self) -> Result<Reassembler<S, M>> {
        Reassembler::with_strategies(self.config, self.selector, self.splicer)
    }
}
