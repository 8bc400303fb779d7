//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rejoin_engine::{
    DocumentSet, EngineConfig, EngineError, ExecutionMode, FailurePolicy, PairSelector,
    Reassembler, Splicer,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Fragment delimiter [default: ;]
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Force parallel processing even for small files
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N", env = "REJOIN_THREADS")]
    pub threads: Option<usize>,

    /// What to emit for a document that cannot be reassembled [default: report]
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_failure: Option<OnFailure>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One reassembled document per line
    Text,
    /// JSON array of per-document reports
    Json,
}

/// Handling of documents whose reassembly fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnFailure {
    /// Emit nothing for the document and exit with status 2
    Report,
    /// Emit the unmerged fragments
    Restore,
    /// Emit whatever was merged before the failure
    Partial,
}

impl From<OnFailure> for FailurePolicy {
    fn from(value: OnFailure) -> Self {
        match value {
            OnFailure::Report => FailurePolicy::Report,
            OnFailure::Restore => FailurePolicy::RestoreOriginal,
            OnFailure::Partial => FailurePolicy::KeepPartial,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        init_logging(self.quiet, self.verbose);

        log::info!("Starting reassembly");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let engine_config = self.engine_config(&config);
        let reassembler = Reassembler::with_config(engine_config)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to process", files.len());

        let batches = load_batches(&files, reassembler.config().delimiter)?;

        let format = self.format.unwrap_or(config.output.format);
        let writer = self.open_output()?;
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(batches.len() as u64);

        let result = reassemble_batches(&reassembler, &batches, formatter.as_mut(), &progress);
        progress.finish();
        result
    }

    /// Merge command-line flags over file configuration
    pub fn engine_config(&self, config: &CliConfig) -> EngineConfig {
        let threads = self.threads.or(match config.performance.worker_threads {
            0 => None,
            n => Some(n),
        });

        EngineConfig {
            delimiter: self.delimiter.unwrap_or(config.processing.delimiter),
            execution_mode: if self.parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Adaptive
            },
            threads,
            parallel_threshold: config.performance.parallel_threshold,
            failure_policy: self.on_failure.unwrap_or(config.processing.on_failure).into(),
        }
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}

/// Read and validate every file
///
/// A malformed line anywhere aborts the run before any output is written.
fn load_batches(files: &[PathBuf], delimiter: char) -> Result<Vec<(PathBuf, DocumentSet)>> {
    files
        .iter()
        .map(|path| -> Result<(PathBuf, DocumentSet)> {
            let text = FileReader::read_text(path)?;
            let documents = DocumentSet::parse(&text, delimiter).map_err(|e| match e {
                EngineError::MalformedInput { line, reason } => CliError::MalformedInput {
                    path: path.display().to_string(),
                    line,
                    reason,
                }
                .into(),
                other => anyhow::Error::new(other),
            })?;
            log::debug!("{}: {} documents", path.display(), documents.len());
            Ok((path.clone(), documents))
        })
        .collect()
}

/// Reassemble validated batches and write one report per document
///
/// Under the report policy any failed document turns into
/// [`CliError::ReassemblyFailed`] once all output is written.
fn reassemble_batches<S, M>(
    reassembler: &Reassembler<S, M>,
    batches: &[(PathBuf, DocumentSet)],
    formatter: &mut dyn OutputFormatter,
    progress: &ProgressReporter,
) -> Result<()>
where
    S: PairSelector + Clone + Send + Sync,
    M: Splicer + Clone + Send + Sync,
{
    let mut total = 0;
    let mut failed = 0;
    for (path, documents) in batches {
        let output = reassembler.process_documents(documents)?;

        for report in &output.reports {
            if let Some(error) = &report.error {
                log::error!("{}:{}: {error}", path.display(), report.number);
            }
            formatter.format_report(path, report)?;
        }

        total += output.summary.documents;
        failed += output.summary.failed;
        progress.file_completed(&path.display().to_string());
    }

    formatter.finish()?;
    log::info!("Processed {total} documents, {failed} failed");

    if failed > 0 && reassembler.config().failure_policy == FailurePolicy::Report {
        return Err(CliError::ReassemblyFailed { failed, total }.into());
    }
    Ok(())
}

/// Initialize logging based on verbosity level
pub fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run in-process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
