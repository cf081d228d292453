//! Command implementations for the faq-matcher CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{debug, info};

use crate::analysis::analyzer::MessageAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::RulesConfig;
use crate::error::Result;
use crate::faq::FaqCatalog;
use crate::matching::{MatchResult, Ranker};
use crate::responder::{CannedAnswerGenerator, Responder};
use crate::stats::MatchStats;

/// Execute a CLI command.
pub fn execute_command(args: FaqMatcherArgs) -> Result<()> {
    match &args.command {
        Command::Match(match_args) => match_command(match_args.clone(), &args),
        Command::Analyze(analyze_args) => analyze_command(analyze_args.clone(), &args),
        Command::Stats(stats_args) => stats_command(stats_args.clone(), &args),
    }
}

/// Load the rules configuration, falling back to defaults when no file is given.
fn load_config(path: Option<&Path>) -> Result<RulesConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading rules configuration");
            RulesConfig::from_file(path)
        }
        None => {
            debug!("no rules configuration given, using defaults");
            Ok(RulesConfig::default())
        }
    }
}

/// Match one message against the catalog.
fn match_command(args: MatchArgs, cli_args: &FaqMatcherArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(min_score) = args.min_score {
        config = config.with_min_score(min_score);
    }

    let catalog = FaqCatalog::from_file(&args.faqs)?;
    let ranker = Ranker::new(&config);

    if args.all {
        let ranked = ranker.rank(&args.text, catalog.as_slice());
        return output_result(&ranked, cli_args);
    }

    if args.fallback {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .context("Failed to start async runtime")?;

        let generator = Arc::new(CannedAnswerGenerator::new());
        let responder = Responder::new(generator)
            .with_timeout(Duration::from_millis(args.fallback_timeout_ms));

        let reply = runtime.block_on(responder.respond(&args.text, catalog.as_slice(), &config))?;
        return output_result(&reply, cli_args);
    }

    let best = ranker.best_ranked(&args.text, catalog.as_slice());
    let output = BestMatchOutput {
        faq: best.as_ref().map(|ranked| ranked.faq),
        result: MatchResult::from(best.map(|ranked| ranked.result)),
    };
    output_result(&output, cli_args)
}

/// Show the normalized text and the tokens a message produces.
fn analyze_command(args: AnalyzeArgs, cli_args: &FaqMatcherArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let analyzer = MessageAnalyzer::from_config(&config);

    let result = AnalysisResult {
        normalizer: analyzer.normalizer().name().to_string(),
        normalized: analyzer.normalize(&args.text),
        tokens: analyzer.terms(&args.text),
    };

    output_result(&result, cli_args)
}

/// Match every line of a message file and summarize.
fn stats_command(args: StatsArgs, cli_args: &FaqMatcherArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let catalog = FaqCatalog::from_file(&args.faqs)?;

    let messages = read_messages(&args.messages_file)?;
    info!(messages = messages.len(), "collecting match statistics");

    let stats = MatchStats::collect(&messages, catalog.as_slice(), &config, args.top);
    output_result(&stats, cli_args)
}

/// Read one message per line, skipping blank lines.
fn read_messages(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open messages file '{}'", path.display()))?;
    let reader = BufReader::new(file);

    let mut messages = Vec::new();
    for line in reader.lines() {
        let line =
            line.with_context(|| format!("Failed to read messages file '{}'", path.display()))?;
        if !line.trim().is_empty() {
            messages.push(line);
        }
    }
    Ok(messages)
}
