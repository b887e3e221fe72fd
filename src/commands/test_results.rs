use std::fs;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::TestResultsArgs;
use crate::commands::CommandContext;
use crate::harness::{TestOutcome, TestSummary, parse_test_results};

#[derive(Debug, Serialize)]
struct TestResultsResponse {
    summary: TestSummary,
    tests: Vec<TestOutcome>,
}

pub fn run(args: TestResultsArgs, context: &CommandContext) -> Result<()> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let tests = parse_test_results(&raw)?;
    let summary = TestSummary::from_outcomes(&tests);

    info!(
        path = %args.input.display(),
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        "parsed test runner output"
    );

    if args.json {
        let response = TestResultsResponse { summary, tests };
        let json = serde_json::to_string_pretty(&response)
            .context("failed to serialize test results")?;
        return context.emit(&json);
    }

    let mut output = format!(
        "total={} passed={} failed={}\n",
        summary.total, summary.passed, summary.failed
    );
    for test in tests.iter().filter(|test| !test.passed) {
        output.push_str(&format!("FAIL: {}\n", test.name));
    }
    context.emit(&output)
}
