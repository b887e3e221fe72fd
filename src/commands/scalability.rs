use anyhow::Result;
use tracing::info;

use crate::cli::ScalabilityArgs;
use crate::commands::CommandContext;
use crate::scalability::{load_runs, summarize};

pub fn run(args: ScalabilityArgs, context: &CommandContext) -> Result<()> {
    let runs = load_runs(&args.files)?;
    info!(kind = ?args.kind, runs = runs.len(), "summarize measurements");
    let csv = summarize(args.kind, &runs)?;
    context.emit(&csv)
}
