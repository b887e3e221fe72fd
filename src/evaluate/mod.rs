//! Scoring of suspiciousness rankings against labeled defect regions.

use anyhow::{Result, bail};
use tracing::warn;

use crate::model::{
    DefectRegion, EvaluationScore, Location, PluginFailure, PluginResult, PluginScore,
    SuspiciousnessItem, TieWarning,
};

mod aggregate;
mod format;
mod report;
#[cfg(test)]
mod tests;

pub use aggregate::aggregate_versions;
pub use format::{format_aggregate_csv, format_scores_csv};
pub use report::{DiagnosticReport, load_report};

#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    pub scores: Vec<PluginScore>,
    pub failures: Vec<PluginFailure>,
    pub tie_warnings: Vec<TieWarning>,
}

/// Zero-based head and tail of the tied block around the first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieWindow {
    pub first_match: usize,
    pub head: usize,
    pub tail: usize,
}

/// Scores every plugin; the statement count must be positive.
pub fn evaluate(
    plugins: &[PluginResult],
    regions: &[DefectRegion],
    executed_statements: usize,
) -> Result<Evaluation> {
    if executed_statements == 0 {
        bail!("executed statement count must be positive");
    }

    let mut evaluation = Evaluation::default();
    for plugin in plugins {
        if let Some(tie_warning) = check_ordering(plugin) {
            warn!(
                plugin = %tie_warning.plugin,
                rank = tie_warning.rank,
                detail = %tie_warning.detail,
                "suspiciousness ranking is not sorted descending"
            );
            evaluation.tie_warnings.push(tie_warning);
        }

        evaluation.scores.push(PluginScore {
            name: plugin.name.clone(),
            score: score_plugin(&plugin.results, regions, executed_statements),
        });
    }

    Ok(evaluation)
}

/// Scores a report; malformed plugin entries are recorded, not fatal.
pub fn evaluate_report(report: &DiagnosticReport, regions: &[DefectRegion]) -> Result<Evaluation> {
    let mut evaluation = evaluate(&report.plugins, regions, report.executed_statements_count)?;
    for failure in &report.failures {
        warn!(plugin = %failure.name, reason = %failure.reason, "plugin skipped");
    }
    evaluation.failures = report.failures.clone();
    Ok(evaluation)
}

pub fn score_plugin(
    results: &[SuspiciousnessItem],
    regions: &[DefectRegion],
    executed_statements: usize,
) -> EvaluationScore {
    let (best, worst) = match tie_window(results, regions) {
        Some(window) => (window.head + 1, window.tail + 1),
        None => (executed_statements, executed_statements),
    };
    build_score(best, worst, executed_statements)
}

/// Finds the first result that subsumes a defect region and widens it to
/// the contiguous run of results with the same suspiciousness.
pub fn tie_window(results: &[SuspiciousnessItem], regions: &[DefectRegion]) -> Option<TieWindow> {
    let first_match = results
        .iter()
        .position(|item| regions.iter().any(|region| subsumes(&item.location, region)))?;
    let score = results[first_match].suspiciousness;

    let mut head = first_match;
    while head > 0 && results[head - 1].suspiciousness == score {
        head -= 1;
    }

    let mut tail = first_match;
    while tail + 1 < results.len() && results[tail + 1].suspiciousness == score {
        tail += 1;
    }

    Some(TieWindow {
        first_match,
        head,
        tail,
    })
}

/// True when the defect region lies inside the reported location.
pub fn subsumes(location: &Location, region: &DefectRegion) -> bool {
    region.line_begin >= location.line_begin && region.line_end <= location.line_end
}

pub fn build_score(best: usize, worst: usize, executed_statements: usize) -> EvaluationScore {
    let total = executed_statements as f64;
    EvaluationScore {
        best,
        worst,
        exam_best: best as f64 / total,
        exam_worst: worst as f64 / total,
        hit5_best: hit(best, 5),
        hit5_worst: hit(worst, 5),
        hit10_best: hit(best, 10),
        hit10_worst: hit(worst, 10),
    }
}

fn hit(count: usize, k: usize) -> u8 {
    u8::from(count <= k)
}

// An ascending step is the only way an equal score can recur after a
// different one, so this also catches non-contiguous ties.
fn check_ordering(plugin: &PluginResult) -> Option<TieWarning> {
    plugin
        .results
        .windows(2)
        .position(|pair| pair[1].suspiciousness > pair[0].suspiciousness)
        .map(|index| TieWarning {
            plugin: plugin.name.clone(),
            rank: index + 2,
            detail: format!(
                "suspiciousness rises from {} to {}",
                plugin.results[index].suspiciousness,
                plugin.results[index + 1].suspiciousness
            ),
        })
}
