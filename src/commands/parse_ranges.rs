use anyhow::{Context, Result};

use crate::cli::ParseRangesArgs;
use crate::commands::CommandContext;
use crate::label::parse_range_list;

pub fn run(args: ParseRangesArgs, context: &CommandContext) -> Result<()> {
    let regions = parse_range_list(&args.input)?;
    let json = serde_json::to_string_pretty(&regions).context("failed to serialize ranges")?;
    context.emit(&json)
}
