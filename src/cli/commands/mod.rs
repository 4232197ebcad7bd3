//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod config_cmd;
mod explain;
mod tag;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use numtag::{Config, InputFormat, OutputFormat};

/// Input format for `tag`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormatArg {
    /// Tab-separated `text pos`, one token per line
    #[default]
    Conll,
    /// One JSON array of tokens per line
    Jsonl,
}

impl From<InputFormatArg> for InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Conll => InputFormat::Conll,
            InputFormatArg::Jsonl => InputFormat::Jsonl,
        }
    }
}

/// Output format for `tag`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormatArg {
    /// Tab-separated `text pos label`, one token per line
    #[default]
    Conll,
    /// One JSON object with tokens and spans per line
    Jsonl,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Conll => OutputFormat::Conll,
            OutputFormatArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}

#[derive(Parser)]
#[command(name = "numtag")]
#[command(about = "Tag numbers, dates, times, money and ordinals in POS-tagged text")]
#[command(version)]
pub struct Cli {
    /// Config file path (TOML, YAML or JSON)
    #[arg(short, long, global = true, env = "NUMTAG_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Label every token of a tokenized, POS-tagged file
    Tag {
        /// Input file (reads stdin if omitted)
        input: Option<PathBuf>,
        /// Input format
        #[arg(short, long, value_enum, default_value = "conll")]
        format: InputFormatArg,
        /// Output format
        #[arg(short, long, value_enum, default_value = "conll")]
        output: OutputFormatArg,
    },

    /// Show which lexical patterns match each word
    Explain {
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing::debug!(verbose = cli.verbose, "parsed arguments");

    let config = Config::load(cli.config.as_deref())?;
    if let Some(path) = &config.source_path {
        tracing::info!("Using config {}", path.display());
    }

    match cli.command {
        Commands::Tag {
            input,
            format,
            output,
        } => tag::cmd_tag(&config, input.as_deref(), format.into(), output.into()),
        Commands::Explain { words } => explain::cmd_explain(&words),
        Commands::Config => config_cmd::cmd_config_show(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_format_flags() {
        let cli = Cli::try_parse_from(["numtag", "tag", "-f", "jsonl", "-o", "conll"]).unwrap();
        match cli.command {
            Commands::Tag { format, output, .. } => {
                assert_eq!(InputFormat::from(format), InputFormat::Jsonl);
                assert_eq!(OutputFormat::from(output), OutputFormat::Conll);
            }
            _ => panic!("Expected tag command"),
        }
    }

    #[test]
    fn test_tag_formats_default_to_conll() {
        let cli = Cli::try_parse_from(["numtag", "tag", "input.txt"]).unwrap();
        match cli.command {
            Commands::Tag { input, format, output } => {
                assert_eq!(input.as_deref(), Some(std::path::Path::new("input.txt")));
                assert_eq!(format, InputFormatArg::Conll);
                assert_eq!(output, OutputFormatArg::Conll);
            }
            _ => panic!("Expected tag command"),
        }
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["numtag", "tag", "-f", "xml"]).is_err());
    }
}
