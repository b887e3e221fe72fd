mod align;
mod cli;
mod commands;
mod evaluate;
mod harness;
mod label;
mod model;
mod scalability;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::CommandContext;
use crate::util::RunClock;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let clock = RunClock::start();
    let cli = Cli::parse();
    let context = CommandContext::new(&cli, clock);

    match cli.command {
        Commands::Label(args) => commands::label::run(args, &context),
        Commands::LabelAll(args) => commands::label_all::run(args, &context),
        Commands::Diff(args) => commands::diff::run(args, &context),
        Commands::ParseRanges(args) => commands::parse_ranges::run(args, &context),
        Commands::Harness(args) => commands::harness::run(args, &context),
        Commands::Compare(args) => commands::compare::run(args, &context),
        Commands::TestResults(args) => commands::test_results::run(args, &context),
        Commands::Evaluate(args) => commands::evaluate::run(args, &context),
        Commands::EvaluateAll(args) => commands::evaluate_all::run(args, &context),
        Commands::Scalability(args) => commands::scalability::run(args, &context),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
