use anyhow::Result;
use tracing::info;

use crate::cli::CompareArgs;
use crate::commands::CommandContext;
use crate::harness::outputs_identical;

pub fn run(args: CompareArgs, context: &CommandContext) -> Result<()> {
    let identical = outputs_identical(&args.golden, &args.candidate)?;
    info!(
        golden = %args.golden.display(),
        candidate = %args.candidate.display(),
        identical,
        "compared outputs"
    );
    context.emit(if identical { "PASS" } else { "FAIL" })
}
