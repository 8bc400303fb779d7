//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

const TEMPLATE: &str = r#"# rejoin configuration

[processing]
# Character separating fragments within a line
delimiter = ";"

# What to emit for a document that cannot be reassembled:
#   "report"  - emit nothing and exit with status 2
#   "restore" - emit the unmerged fragments
#   "partial" - emit whatever was merged before the failure
on_failure = "report"

[output]
# "text" (one document per line) or "json"
format = "text"
pretty_json = true

[performance]
# Documents per file before the thread pool is used
parallel_threshold = 64

# Number of worker threads (0 = auto)
worker_threads = 0
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for processing:");
        println!(
            "   rejoin process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template(&self) -> &'static str {
        TEMPLATE
    }
}
