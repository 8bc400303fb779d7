//! Output formatting module

use anyhow::Result;
use rejoin_engine::DocumentReport;
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the report for one document of `source`
    fn format_report(&mut self, source: &Path, report: &DocumentReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
