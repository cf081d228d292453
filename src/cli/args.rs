//! Command line argument parsing for the faq-matcher CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// faq-matcher - Match support messages against an FAQ catalog
#[derive(Parser, Debug, Clone)]
#[command(name = "faq-matcher")]
#[command(about = "Match support messages against an FAQ catalog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FaqMatcherArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FaqMatcherArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// The log level used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find the FAQ that best answers a message
    Match(MatchArgs),

    /// Show how a message is normalized and tokenized
    Analyze(AnalyzeArgs),

    /// Summarize matching over a file of messages
    Stats(StatsArgs),
}

/// Arguments for matching a message
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Message text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// FAQ catalog file (JSON array)
    #[arg(long, value_name = "FAQ_FILE", env = "FAQ_MATCHER_FAQS")]
    pub faqs: PathBuf,

    /// Rules configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "FAQ_MATCHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured minimum score
    #[arg(long)]
    pub min_score: Option<u32>,

    /// List every FAQ with its score instead of the best match
    #[arg(long)]
    pub all: bool,

    /// Generate an answer when no FAQ matches
    #[arg(long, conflicts_with = "all")]
    pub fallback: bool,

    /// Time allowed for the generated answer, in milliseconds
    #[arg(long, default_value = "10000")]
    pub fallback_timeout_ms: u64,
}

/// Arguments for analyzing a message
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Message text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Rules configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "FAQ_MATCHER_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for batch statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// File with one message per line
    #[arg(value_name = "MESSAGES_FILE")]
    pub messages_file: PathBuf,

    /// FAQ catalog file (JSON array)
    #[arg(long, value_name = "FAQ_FILE", env = "FAQ_MATCHER_FAQS")]
    pub faqs: PathBuf,

    /// Rules configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "FAQ_MATCHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of top keywords and questions to report
    #[arg(long, default_value = "10")]
    pub top: usize,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
