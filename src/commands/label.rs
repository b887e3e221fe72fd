use anyhow::Result;
use tracing::info;

use crate::cli::LabelArgs;
use crate::commands::CommandContext;
use crate::label::{label, load_labels_or_default, merge_labels, save_labels};
use crate::model::VersionId;

pub fn run(args: LabelArgs, context: &CommandContext) -> Result<()> {
    let version = VersionId::new(args.version);
    info!(
        elapsed = %context.elapsed(),
        version = %version,
        healthy = %args.healthy.display(),
        buggy = %args.buggy.display(),
        "determine buggy lines"
    );

    let labeling = label(&args.healthy, &args.buggy, &version)?;
    info!(
        elapsed = %context.elapsed(),
        regions = labeling.regions().len(),
        "labeling complete"
    );

    if args.dry_run {
        info!("labels dry-run; nothing written");
    } else {
        let labels_path = context.labels_path(args.labels_file);
        let mut labels = load_labels_or_default(&labels_path)?;
        merge_labels(&mut labels, labeling.labels.clone());
        save_labels(&labels_path, &labels)?;
        info!(path = %labels_path.display(), versions = labels.len(), "wrote labels");
    }

    context.emit(&labeling.diff)
}
