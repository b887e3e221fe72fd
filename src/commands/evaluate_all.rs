use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::EvaluateAllArgs;
use crate::commands::CommandContext;
use crate::commands::evaluate::{log_scores, version_regions};
use crate::evaluate::{aggregate_versions, evaluate_report, format_aggregate_csv, load_report};
use crate::label::load_labels;
use crate::model::VersionId;

const REPORT_FILE_NAME: &str = "results.json";

pub fn run(args: EvaluateAllArgs, context: &CommandContext) -> Result<()> {
    let reports = discover_reports(&args.results_root, &args.excluded_versions)?;
    let labels_path = context.labels_path(args.labels);
    let labels = load_labels(&labels_path)?;

    let mut runs = Vec::new();
    for (version, report_path) in reports {
        let regions = version_regions(&labels, &version, &labels_path)?;
        let report = load_report(&report_path)?;
        let evaluation = evaluate_report(&report, regions)?;
        info!(
            elapsed = %context.elapsed(),
            version = %version,
            plugins = evaluation.scores.len(),
            "evaluated version"
        );
        log_scores(&version, &evaluation);
        runs.push((version, evaluation.scores));
    }

    let aggregates = aggregate_versions(&runs);
    info!(versions = runs.len(), plugins = aggregates.len(), "aggregated scores");
    context.emit(&format_aggregate_csv(&aggregates))
}

pub fn discover_reports(
    root: &Path,
    excluded_versions: &[String],
) -> Result<Vec<(VersionId, PathBuf)>> {
    let entries = fs::read_dir(root).with_context(|| format!("failed to read {}", root.display()))?;

    let mut reports = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", root.display()))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if excluded_versions.iter().any(|excluded| *excluded == name) {
            info!(version = %name, "version excluded");
            continue;
        }
        reports.push((VersionId::new(name), path.join(REPORT_FILE_NAME)));
    }
    reports.sort_by(|left, right| left.0.cmp(&right.0));

    Ok(reports)
}
