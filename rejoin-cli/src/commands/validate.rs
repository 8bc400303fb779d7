//! Validate command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use anyhow::Result;
use clap::Args;
use rejoin_engine::{DocumentSet, EngineError, DEFAULT_DELIMITER};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Fragment delimiter
    #[arg(short, long, value_name = "CHAR", default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let files = resolve_patterns(&self.input)?;
        let mut first_error = None;

        for path in &files {
            let text = FileReader::read_text(path)?;
            match DocumentSet::parse(&text, self.delimiter) {
                Ok(documents) => {
                    println!("✓ {}: {} documents", path.display(), documents.len());
                }
                Err(EngineError::MalformedInput { line, reason }) => {
                    println!("✗ {}: line {line}: {reason}", path.display());
                    first_error.get_or_insert(CliError::MalformedInput {
                        path: path.display().to_string(),
                        line,
                        reason,
                    });
                }
                Err(other) => return Err(other.into()),
            }
        }

        match first_error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}
