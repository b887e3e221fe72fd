use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::model::DefectRegion;

/// Parses hand-entered line ranges such as `3,7-9`.
///
/// Every comma-separated token must be `N` or `N-M` with `N <= M`.
pub fn parse_range_list(input: &str) -> Result<Vec<DefectRegion>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let pattern = Regex::new(r"^(\d+)(?:\s*-\s*(\d+))?$").context("failed to compile range regex")?;

    let mut regions = Vec::new();
    for token in trimmed.split(',').map(str::trim) {
        let Some(captures) = pattern.captures(token) else {
            bail!("invalid line range {token:?}: expected N or N-M");
        };

        let line_begin = captures[1]
            .parse::<usize>()
            .with_context(|| format!("invalid line number in range {token:?}"))?;
        let line_end = match captures.get(2) {
            Some(end) => end
                .as_str()
                .parse::<usize>()
                .with_context(|| format!("invalid line number in range {token:?}"))?,
            None => line_begin,
        };

        if line_begin > line_end {
            bail!("invalid line range {token:?}: begin is after end");
        }

        regions.push(DefectRegion {
            kind: None,
            line_begin,
            line_end,
        });
    }

    Ok(regions)
}
