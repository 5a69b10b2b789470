//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// One human-readable line
    Text,
    /// JSON object with a `status` tag
    Json,
}

impl From<OutputFormatArg> for flow_domain::OutputFormat {
    fn from(format: OutputFormatArg) -> Self {
        match format {
            OutputFormatArg::Text => flow_domain::OutputFormat::Text,
            OutputFormatArg::Json => flow_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for fallible-flow
#[derive(Parser, Debug)]
#[command(name = "fallible-flow")]
#[command(author, version, about = "Compose two fallible async lookups into one record")]
#[command(long_about = r#"
fallible-flow looks up an animal, then a machine, and merges both records.

The machine lookup only starts after the animal lookup succeeded. The first
failure ends the run and is reported instead of the merged record.

Configuration files are loaded from (in priority order):
1. FALLIBLE_FLOW_*     Environment variables (e.g. FALLIBLE_FLOW_ANIMAL__LEGS=2)
2. --config <path>     Explicit config file
3. ./flow.toml         Project-level config
4. ~/.config/fallible-flow/config.toml   Global config

Example:
  fallible-flow
  fallible-flow --output json
  fallible-flow --fail-animal "network down"
"#)]
pub struct Cli {
    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Make the animal lookup fail with this message
    #[arg(long, value_name = "MESSAGE")]
    pub fail_animal: Option<String>,

    /// Make the machine lookup fail with this message
    #[arg(long, value_name = "MESSAGE")]
    pub fail_machine: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (FALLIBLE_FLOW_* variables still apply)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
