//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use sift_extractor::StrategyKind;
use std::path::PathBuf;

/// Sift - Validate files and extract their text, one at a time.
#[derive(Debug, Parser)]
#[command(name = "sift")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Files to process, in order
    pub files: Vec<PathBuf>,

    /// Extraction strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Also accept Word, Excel and PowerPoint files
    #[arg(long)]
    pub extended_types: bool,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip the simulated upload delay
    #[arg(long)]
    pub instant: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (ID and status only)
    Quiet,
}

/// Extraction strategy options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StrategyArg {
    /// Parse text and PDF locally
    Local,
    /// Ask the generative model, falling back to local text
    Remote,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Local => StrategyKind::Local,
            StrategyArg::Remote => StrategyKind::Remote,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
