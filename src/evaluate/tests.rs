use serde_json::json;

use super::format::csv_field;
use super::report::parse_report;
use super::*;
use crate::model::{RegionKind, VersionId};

fn item(line: usize, suspiciousness: f64) -> SuspiciousnessItem {
    SuspiciousnessItem {
        location: Location {
            line_begin: line,
            line_end: line,
        },
        suspiciousness,
    }
}

fn region(line_begin: usize, line_end: usize) -> DefectRegion {
    DefectRegion {
        kind: Some(RegionKind::Replace),
        line_begin,
        line_end,
    }
}

fn plugin(name: &str, results: Vec<SuspiciousnessItem>) -> PluginResult {
    PluginResult {
        name: name.to_string(),
        results,
    }
}

#[test]
fn tied_block_widens_from_first_match() {
    let results = vec![item(7, 0.9), item(1, 0.9), item(2, 0.9), item(3, 0.5)];
    let regions = vec![region(7, 7)];

    let window = tie_window(&results, &regions).expect("match");
    assert_eq!(
        window,
        TieWindow {
            first_match: 0,
            head: 0,
            tail: 2
        }
    );

    let score = score_plugin(&results, &regions, 40);
    assert_eq!(score.best, 1);
    assert_eq!(score.worst, 3);
}

#[test]
fn match_inside_tied_block_reaches_back_to_block_head() {
    let results = vec![
        item(1, 1.0),
        item(2, 0.7),
        item(3, 0.7),
        item(9, 0.7),
        item(4, 0.7),
        item(5, 0.2),
    ];
    let score = score_plugin(&results, &[region(9, 9)], 100);
    assert_eq!(score.best, 2);
    assert_eq!(score.worst, 5);
}

#[test]
fn block_spanning_whole_ranking_starts_at_rank_one() {
    let results = vec![item(1, 0.4), item(2, 0.4), item(3, 0.4)];
    let score = score_plugin(&results, &[region(3, 3)], 10);
    assert_eq!((score.best, score.worst), (1, 3));
}

#[test]
fn containment_is_of_region_inside_reported_location() {
    let wide = SuspiciousnessItem {
        location: Location {
            line_begin: 10,
            line_end: 20,
        },
        suspiciousness: 0.8,
    };
    assert!(subsumes(&wide.location, &region(12, 14)));
    assert!(!subsumes(&item(12, 0.8).location, &region(12, 14)));

    let score = score_plugin(&[item(12, 0.9), wide], &[region(12, 14)], 50);
    assert_eq!(score.best, 2);
}

#[test]
fn no_match_charges_every_executed_statement() {
    let results = vec![item(1, 0.9), item(2, 0.5)];
    let score = score_plugin(&results, &[region(30, 31)], 42);
    assert_eq!(score.best, 42);
    assert_eq!(score.worst, 42);
    assert_eq!(score.exam_best, 1.0);
    assert_eq!(score.exam_worst, 1.0);
    assert_eq!(score.hit10_best, 0);
}

#[test]
fn empty_results_and_empty_regions_use_no_match_defaults() {
    let empty = score_plugin(&[], &[region(1, 1)], 42);
    assert_eq!((empty.best, empty.worst), (42, 42));

    let unlabeled = score_plugin(&[item(1, 1.0)], &[], 42);
    assert_eq!((unlabeled.best, unlabeled.worst), (42, 42));
}

#[test]
fn hit_at_five_boundary() {
    let at_five = build_score(5, 6, 100);
    assert_eq!(at_five.hit5_best, 1);
    assert_eq!(at_five.hit5_worst, 0);
    assert_eq!(at_five.hit10_worst, 1);

    let at_eleven = build_score(10, 11, 100);
    assert_eq!(at_eleven.hit10_best, 1);
    assert_eq!(at_eleven.hit10_worst, 0);
    assert_eq!(at_eleven.exam_best, 0.1);
}

#[test]
fn zero_executed_statements_is_rejected() {
    let error = evaluate(&[], &[], 0).expect_err("zero statements");
    assert!(error.to_string().contains("positive"));
}

#[test]
fn unsorted_ranking_is_flagged_but_not_resorted() {
    let plugins = vec![
        plugin("sorted", vec![item(1, 0.9), item(2, 0.5)]),
        plugin(
            "recurring",
            vec![item(1, 0.9), item(2, 0.5), item(3, 0.9), item(4, 0.1)],
        ),
    ];
    let evaluation = evaluate(&plugins, &[region(3, 3)], 20).expect("evaluate");

    assert_eq!(evaluation.tie_warnings.len(), 1);
    assert_eq!(evaluation.tie_warnings[0].plugin, "recurring");
    assert_eq!(evaluation.tie_warnings[0].rank, 3);

    let recurring = &evaluation.scores[1];
    assert_eq!(recurring.name, "recurring");
    assert_eq!((recurring.score.best, recurring.score.worst), (3, 3));
}

#[test]
fn malformed_plugin_does_not_abort_the_report() {
    let value = json!({
        "executed_statements_count": 20,
        "statements_count": 35,
        "plugins": [
            {
                "name": "ochiai",
                "results": [
                    {"location": {"file": "buggy.c", "line_begin": 4, "line_end": 4}, "suspiciousness": 0.8},
                    {"location": {"line_begin": 5, "line_end": 5}, "suspiciousness": 0.3}
                ]
            },
            {
                "name": "broken",
                "results": [
                    {"location": {"line_begin": 4, "line_end": 4}, "suspiciousness": "high"}
                ]
            },
            {
                "results": []
            },
            {
                "name": "silent",
                "results": []
            }
        ]
    });

    let report = parse_report(&value).expect("report");
    assert_eq!(report.statements_count, Some(35));
    assert_eq!(report.plugins.len(), 2);
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].name, "broken");
    assert_eq!(report.failures[1].name, "plugin #3");

    let evaluation = evaluate_report(&report, &[region(4, 4)]).expect("evaluate");
    assert_eq!(evaluation.failures.len(), 2);
    assert_eq!(evaluation.scores[0].name, "ochiai");
    assert_eq!(evaluation.scores[0].score.best, 1);
    assert_eq!(evaluation.scores[1].name, "silent");
    assert_eq!(evaluation.scores[1].score.best, 20);
    assert_eq!(evaluation.scores[1].score.exam_worst, 1.0);
}

#[test]
fn report_without_statement_count_is_fatal() {
    for value in [
        json!({"plugins": []}),
        json!({"executed_statements_count": 0, "plugins": []}),
        json!({"executed_statements_count": "12", "plugins": []}),
    ] {
        let error = parse_report(&value).expect_err("invalid count");
        assert!(error.to_string().contains("executed_statements_count"));
    }

    let error = parse_report(&json!({"executed_statements_count": 3})).expect_err("no plugins");
    assert!(error.to_string().contains("plugins"));
}

#[test]
fn load_report_names_missing_path() {
    let error = load_report(std::path::Path::new("/nonexistent/results.json"))
        .expect_err("missing report");
    assert!(error.to_string().contains("/nonexistent/results.json"));
}

#[test]
fn scores_csv_lists_plugins_in_report_order() {
    let scores = vec![
        PluginScore {
            name: "ochiai".to_string(),
            score: build_score(2, 4, 8),
        },
        PluginScore {
            name: "dstar".to_string(),
            score: build_score(8, 8, 8),
        },
    ];
    let csv = format_scores_csv(&scores);
    let lines = csv.lines().collect::<Vec<_>>();
    assert_eq!(
        lines[0],
        "plugin,best,worst,EXAM best,EXAM worst,hit@5 best,hit@5 worst,hit@10 best,hit@10 worst"
    );
    assert_eq!(lines[1], "ochiai,2,4,0.25,0.5,1,1,1,1");
    assert_eq!(lines[2], "dstar,8,8,1,1,0,0,1,1");
}

#[test]
fn aggregate_averages_each_plugin_across_versions() {
    let runs = vec![
        (
            VersionId::new("v1"),
            vec![PluginScore {
                name: "ochiai".to_string(),
                score: build_score(1, 4, 10),
            }],
        ),
        (
            VersionId::new("v2"),
            vec![
                PluginScore {
                    name: "ochiai".to_string(),
                    score: build_score(10, 10, 10),
                },
                PluginScore {
                    name: "dstar".to_string(),
                    score: build_score(5, 6, 10),
                },
            ],
        ),
    ];

    let aggregates = aggregate_versions(&runs);
    assert_eq!(aggregates.len(), 2);
    assert_eq!(aggregates[0].plugin, "ochiai");
    assert_eq!(aggregates[0].versions.len(), 2);
    assert_eq!(aggregates[0].average, [0.55, 0.7, 0.5, 0.5, 1.0, 1.0]);
    assert_eq!(aggregates[1].plugin, "dstar");
    assert_eq!(aggregates[1].average, [0.5, 0.6, 1.0, 0.0, 1.0, 1.0]);

    let csv = format_aggregate_csv(&aggregates);
    let lines = csv.lines().collect::<Vec<_>>();
    assert_eq!(
        lines[0],
        "plugin,version,EXAM best,EXAM worst,hit@5 best,hit@5 worst,hit@10 best,hit@10 worst"
    );
    assert_eq!(lines[1], "ochiai,v1,0.1,0.4,1,1,1,1");
    assert_eq!(lines[3], "ochiai,avg,0.55,0.7,0.5,0.5,1,1");
    assert_eq!(lines.len(), 6);
}

#[test]
fn csv_fields_with_delimiters_or_quotes_are_quoted() {
    assert_eq!(csv_field("ochiai"), "ochiai");
    assert_eq!(csv_field("tarantula, weighted"), "\"tarantula, weighted\"");
    assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");

    let scores = vec![PluginScore {
        name: "dstar,2".to_string(),
        score: build_score(1, 1, 4),
    }];
    let csv = format_scores_csv(&scores);
    assert_eq!(csv.lines().nth(1), Some("\"dstar,2\",1,1,0.25,0.25,1,1,1,1"));

    let runs = vec![(
        VersionId::new("v1"),
        vec![PluginScore {
            name: "a\"b".to_string(),
            score: build_score(2, 2, 4),
        }],
    )];
    let aggregate = format_aggregate_csv(&aggregate_versions(&runs));
    assert_eq!(aggregate.lines().nth(1), Some("\"a\"\"b\",v1,0.5,0.5,1,1,1,1"));
}
