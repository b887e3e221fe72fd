use anyhow::Result;

use crate::cli::DiffArgs;
use crate::commands::CommandContext;
use crate::label::label;
use crate::model::VersionId;

pub fn run(args: DiffArgs, context: &CommandContext) -> Result<()> {
    let labeling = label(&args.healthy, &args.buggy, &VersionId::new("diff"))?;
    context.emit(&labeling.diff)
}
