use std::borrow::Cow;
use std::fmt::Write as _;

use super::aggregate::{AGGREGATE_METRICS, MetricRow, PluginAggregate};
use crate::model::PluginScore;

const SCORE_COLUMNS: [&str; 8] = [
    "best",
    "worst",
    "EXAM best",
    "EXAM worst",
    "hit@5 best",
    "hit@5 worst",
    "hit@10 best",
    "hit@10 worst",
];

pub fn format_scores_csv(scores: &[PluginScore]) -> String {
    let mut output = format!("plugin,{}\n", SCORE_COLUMNS.join(","));
    for plugin_score in scores {
        let score = &plugin_score.score;
        let _ = writeln!(
            output,
            "{},{},{},{},{},{},{},{},{}",
            csv_field(&plugin_score.name),
            score.best,
            score.worst,
            score.exam_best,
            score.exam_worst,
            score.hit5_best,
            score.hit5_worst,
            score.hit10_best,
            score.hit10_worst
        );
    }
    output
}

pub fn format_aggregate_csv(aggregates: &[PluginAggregate]) -> String {
    let mut output = format!("plugin,version,{}\n", AGGREGATE_METRICS.join(","));
    for aggregate in aggregates {
        for (version, row) in &aggregate.versions {
            push_row(&mut output, &aggregate.plugin, version.as_str(), row);
        }
        push_row(&mut output, &aggregate.plugin, "avg", &aggregate.average);
    }
    output
}

fn push_row(output: &mut String, plugin: &str, version: &str, row: &MetricRow) {
    let values = row.iter().map(f64::to_string).collect::<Vec<_>>();
    let _ = writeln!(
        output,
        "{},{},{}",
        csv_field(plugin),
        csv_field(version),
        values.join(",")
    );
}

/// Quotes a field only when it holds a delimiter, quote or line break.
pub fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
