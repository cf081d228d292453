//! faq-matcher CLI binary.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use faq_matcher::cli::args::FaqMatcherArgs;
use faq_matcher::cli::commands::execute_command;

fn main() {
    let args = FaqMatcherArgs::parse();

    // RUST_LOG wins over the verbosity flags.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("faq_matcher={}", args.log_level())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
