use crate::model::{EvaluationScore, PluginScore, VersionId};

pub const AGGREGATE_METRICS: [&str; 6] = [
    "EXAM best",
    "EXAM worst",
    "hit@5 best",
    "hit@5 worst",
    "hit@10 best",
    "hit@10 worst",
];

pub type MetricRow = [f64; 6];

#[derive(Debug, Clone, PartialEq)]
pub struct PluginAggregate {
    pub plugin: String,
    pub versions: Vec<(VersionId, MetricRow)>,
    pub average: MetricRow,
}

fn metric_row(score: &EvaluationScore) -> MetricRow {
    [
        score.exam_best,
        score.exam_worst,
        f64::from(score.hit5_best),
        f64::from(score.hit5_worst),
        f64::from(score.hit10_best),
        f64::from(score.hit10_worst),
    ]
}

/// Groups per-version scores by plugin, in first-seen plugin order, and
/// appends the mean of every metric.
pub fn aggregate_versions(runs: &[(VersionId, Vec<PluginScore>)]) -> Vec<PluginAggregate> {
    let mut aggregates: Vec<PluginAggregate> = Vec::new();

    for (version, scores) in runs {
        for plugin_score in scores {
            let row = metric_row(&plugin_score.score);
            match aggregates
                .iter_mut()
                .find(|aggregate| aggregate.plugin == plugin_score.name)
            {
                Some(aggregate) => aggregate.versions.push((version.clone(), row)),
                None => aggregates.push(PluginAggregate {
                    plugin: plugin_score.name.clone(),
                    versions: vec![(version.clone(), row)],
                    average: [0.0; 6],
                }),
            }
        }
    }

    for aggregate in &mut aggregates {
        let count = aggregate.versions.len() as f64;
        let mut average = [0.0_f64; 6];
        for (_, row) in &aggregate.versions {
            for (total, value) in average.iter_mut().zip(row) {
                *total += value;
            }
        }
        for total in &mut average {
            *total /= count;
        }
        aggregate.average = average;
    }

    aggregates
}
