//! Command line interface for faq-matcher.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{AnalyzeArgs, Command, FaqMatcherArgs, MatchArgs, OutputFormat, StatsArgs};
pub use commands::execute_command;
pub use output::{AnalysisResult, BestMatchOutput, Render, output_result};
