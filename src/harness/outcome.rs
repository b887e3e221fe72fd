use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestOutcome {
    pub name: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl TestSummary {
    pub fn from_outcomes(outcomes: &[TestOutcome]) -> Self {
        let passed = outcomes.iter().filter(|outcome| outcome.passed).count();
        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
        }
    }
}

/// Parses runner output into per-test verdicts in the order printed.
pub fn parse_test_results(output: &str) -> Result<Vec<TestOutcome>> {
    let pattern = Regex::new(r"^(PASS|FAIL): (Test #\d+)$")
        .context("failed to compile test result regex")?;

    let mut outcomes = Vec::new();
    for (index, line) in output.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(captures) = pattern.captures(line) else {
            warn!(line_number = index + 1, line = %line, "skipping unrecognized runner output");
            continue;
        };
        outcomes.push(TestOutcome {
            name: captures[2].to_string(),
            passed: &captures[1] == "PASS",
        });
    }

    Ok(outcomes)
}
