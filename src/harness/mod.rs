//! Test-runner synthesis.
//!
//! The generated C program runs every test command against the candidate
//! build, compares its output with the golden output captured from the
//! healthy build and prints `PASS: Test #<n>` or `FAIL: Test #<n>` per test.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;

use crate::util::read_lines_lossy;

mod compare;
mod outcome;
mod template;

pub use compare::outputs_identical;
pub use outcome::{TestOutcome, TestSummary, parse_test_results};

/// File names and hooks baked into the generated runner.
#[derive(Debug, Clone)]
pub struct HarnessLayout {
    pub candidate_binary: String,
    pub candidate_output: String,
    pub golden_prefix: String,
    pub golden_suffix: String,
    pub marker_function: String,
}

impl Default for HarnessLayout {
    fn default() -> Self {
        Self {
            candidate_binary: "./buggy".to_string(),
            candidate_output: "buggy.out".to_string(),
            golden_prefix: "healthy.".to_string(),
            golden_suffix: ".out".to_string(),
            marker_function: "aardwolf_write_external".to_string(),
        }
    }
}

impl HarnessLayout {
    /// Golden output file for a 1-based test number.
    pub fn golden_file(&self, test_number: usize) -> String {
        format!("{}{test_number}{}", self.golden_prefix, self.golden_suffix)
    }
}

/// Reads test argument strings, one per line; blank lines are skipped.
pub fn read_universe(path: &Path) -> Result<Vec<String>> {
    Ok(read_lines_lossy(path)?
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Number of tests emitted for `command_count` commands under `limit`.
///
/// The limit is compared with the zero-based index after a test is emitted,
/// so `Some(n)` keeps `n + 1` tests.
pub fn emitted_test_count(command_count: usize, limit: Option<usize>) -> usize {
    match limit {
        Some(limit) => command_count.min(limit.saturating_add(1)),
        None => command_count,
    }
}

pub fn synthesize(commands: &[String], limit: Option<usize>, layout: &HarnessLayout) -> String {
    let mut code = String::from(template::PROLOG);

    let count = emitted_test_count(commands.len(), limit);
    let tests = commands
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, args)| render_test(index + 1, args, layout))
        .collect::<Vec<_>>();

    code.push_str(&tests.join("\n"));
    code.push_str(template::EPILOG);
    code
}

fn render_test(test_number: usize, args: &str, layout: &HarnessLayout) -> String {
    let command = escape_c_string(&format!(
        "{} {} > {}",
        layout.candidate_binary,
        args.trim(),
        layout.candidate_output
    ));
    let golden = escape_c_string(&layout.golden_file(test_number));
    let candidate = escape_c_string(&layout.candidate_output);

    let mut block = String::new();
    // writing into a String cannot fail
    let _ = writeln!(block);
    let _ = writeln!(
        block,
        "    {}(\"Test #{test_number}\");",
        layout.marker_function
    );
    let _ = writeln!(block, "    run(\"{command}\");");
    let _ = writeln!(block, "    result = diff(\"{golden}\", \"{candidate}\");");
    let _ = writeln!(
        block,
        "    if (result == 0) {{ printf(\"PASS: Test #{test_number}\\n\"); }} else {{ printf(\"FAIL: Test #{test_number}\\n\"); }}"
    );
    block
}

pub fn escape_c_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
