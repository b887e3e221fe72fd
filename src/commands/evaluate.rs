use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::EvaluateArgs;
use crate::commands::CommandContext;
use crate::evaluate::{Evaluation, evaluate_report, format_scores_csv, load_report};
use crate::label::load_labels;
use crate::model::{
    DefectRegion, EvaluationRunManifest, SourceDigest, VersionId, VersionLabels,
};
use crate::util::{now_utc_string, sha256_file, write_json_pretty};

pub fn run(args: EvaluateArgs, context: &CommandContext) -> Result<()> {
    let labels_path = context.labels_path(args.labels);
    let labels = load_labels(&labels_path)?;
    let version = VersionId::new(args.version);
    let regions = version_regions(&labels, &version, &labels_path)?;

    let report = load_report(&args.report)?;
    info!(
        elapsed = %context.elapsed(),
        report = %args.report.display(),
        plugins = report.plugins.len(),
        malformed = report.failures.len(),
        executed_statements = report.executed_statements_count,
        "evaluate"
    );

    let evaluation = evaluate_report(&report, regions)?;

    if let Some(manifest_path) = args.manifest_path {
        let manifest = EvaluationRunManifest {
            manifest_version: 1,
            version: version.to_string(),
            generated_at: now_utc_string(),
            executed_statements_count: report.executed_statements_count,
            statements_count: report.statements_count,
            inputs: vec![digest(&args.report)?, digest(&labels_path)?],
            scores: evaluation.scores.clone(),
            plugin_failures: evaluation.failures.clone(),
            tie_warnings: evaluation.tie_warnings.clone(),
        };
        write_json_pretty(&manifest_path, &manifest)?;
        info!(path = %manifest_path.display(), "wrote evaluation manifest");
    }

    log_scores(&version, &evaluation);
    context.emit(&format_scores_csv(&evaluation.scores))
}

pub fn version_regions<'a>(
    labels: &'a VersionLabels,
    version: &VersionId,
    labels_path: &Path,
) -> Result<&'a [DefectRegion]> {
    labels
        .get(version)
        .map(Vec::as_slice)
        .with_context(|| format!("version {version} has no labels in {}", labels_path.display()))
}

pub fn log_scores(version: &VersionId, evaluation: &Evaluation) {
    for plugin_score in &evaluation.scores {
        info!(
            version = %version,
            plugin = %plugin_score.name,
            best = plugin_score.score.best,
            worst = plugin_score.score.worst,
            "plugin scored"
        );
    }
}

fn digest(path: &Path) -> Result<SourceDigest> {
    Ok(SourceDigest {
        path: path.display().to_string(),
        sha256: sha256_file(path)?,
    })
}
