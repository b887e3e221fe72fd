use anyhow::Result;
use tracing::info;

use crate::cli::LabelAllArgs;
use crate::commands::CommandContext;
use crate::label::{label_all, load_labels_or_default, merge_labels, save_labels};

pub fn run(args: LabelAllArgs, context: &CommandContext) -> Result<()> {
    let labeled = label_all(&args.healthy, &args.versions_dir)?;

    let labels_path = context.labels_path(args.labels_file);
    let mut labels = load_labels_or_default(&labels_path)?;
    let mut diffs = String::new();
    for (version, labeling) in labeled {
        info!(
            elapsed = %context.elapsed(),
            version = %version,
            regions = labeling.regions().len(),
            "labeled version"
        );
        diffs.push_str(&labeling.diff);
        merge_labels(&mut labels, labeling.labels);
    }

    save_labels(&labels_path, &labels)?;
    info!(path = %labels_path.display(), versions = labels.len(), "wrote labels");

    context.emit(&diffs)
}
