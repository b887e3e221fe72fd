use anyhow::Result;
use tracing::info;

use crate::cli::HarnessArgs;
use crate::commands::CommandContext;
use crate::harness::{HarnessLayout, emitted_test_count, read_universe, synthesize};
use crate::util::write_text;

pub fn run(args: HarnessArgs, context: &CommandContext) -> Result<()> {
    let commands = read_universe(&args.universe)?;
    info!(
        elapsed = %context.elapsed(),
        universe = %args.universe.display(),
        commands = commands.len(),
        limit = ?args.limit,
        "generate test runner"
    );

    let layout = HarnessLayout {
        candidate_binary: args.candidate_binary,
        marker_function: args.marker_function,
        ..HarnessLayout::default()
    };
    let code = synthesize(&commands, args.limit, &layout);

    let output_path = context.harness_path(args.output);
    write_text(&output_path, &code)?;
    info!(
        path = %output_path.display(),
        tests = emitted_test_count(commands.len(), args.limit),
        "wrote test runner"
    );

    Ok(())
}
