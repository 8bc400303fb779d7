//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reassemble shredded documents, one per input line
    Process(process::ProcessArgs),

    /// Check the delimiter structure of input files without reassembling
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_process_command_parses() {
        let cli = TestCli::try_parse_from([
            "rejoin", "process", "-i", "a.txt", "-i", "b*.txt", "-d", "|", "-f", "json",
            "--on-failure", "partial", "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.input, vec!["a.txt", "b*.txt"]);
                assert_eq!(args.delimiter, Some('|'));
                assert_eq!(args.format, Some(process::OutputFormat::Json));
                assert_eq!(args.on_failure, Some(process::OnFailure::Partial));
                assert_eq!(args.verbose, 2);
            }
            other => panic!("expected process, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_requires_input() {
        assert!(TestCli::try_parse_from(["rejoin", "validate"]).is_err());
    }

    #[test]
    fn test_generate_config_parses() {
        let cli =
            TestCli::try_parse_from(["rejoin", "generate-config", "-o", "rejoin.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::GenerateConfig(_)));
    }
}
