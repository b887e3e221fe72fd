use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::align::{OpTag, SequenceMatcher};
use crate::model::{DefectRegion, RegionKind, VersionId, VersionLabels};
use crate::util::read_lines_lossy;

mod ranges;
mod store;
mod unified;

pub use ranges::parse_range_list;
pub use store::{load_labels, load_labels_or_default, merge_labels, save_labels};
pub use unified::unified_diff;

pub const BUGGY_DIFF_NAME: &str = "buggy.c";
pub const HEALTHY_DIFF_NAME: &str = "healthy.c";
pub const DIFF_CONTEXT_LINES: usize = 3;

#[derive(Debug, Clone)]
pub struct DefectLabeling {
    pub labels: VersionLabels,
    pub diff: String,
}

impl DefectLabeling {
    pub fn regions(&self) -> &[DefectRegion] {
        self.labels
            .values()
            .next()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Labels the lines of `buggy_path` that diverge from `healthy_path`.
pub fn label(healthy_path: &Path, buggy_path: &Path, version: &VersionId) -> Result<DefectLabeling> {
    let healthy_lines = read_lines_lossy(healthy_path)?;
    let buggy_lines = read_lines_lossy(buggy_path)?;
    Ok(label_lines(&healthy_lines, &buggy_lines, version))
}

pub fn label_lines(healthy: &[String], buggy: &[String], version: &VersionId) -> DefectLabeling {
    let matcher = SequenceMatcher::new(buggy, healthy);

    let regions = matcher
        .opcodes()
        .into_iter()
        .filter_map(|opcode| {
            let kind = match opcode.tag {
                OpTag::Equal => return None,
                OpTag::Insert => RegionKind::Insert,
                OpTag::Delete => RegionKind::Delete,
                OpTag::Replace => RegionKind::Replace,
            };
            Some(DefectRegion {
                kind: Some(kind),
                line_begin: opcode.a.start,
                line_end: opcode.a.end,
            })
        })
        .collect::<Vec<_>>();

    let diff = unified_diff(
        &matcher,
        buggy,
        healthy,
        BUGGY_DIFF_NAME,
        HEALTHY_DIFF_NAME,
        DIFF_CONTEXT_LINES,
    );

    let mut labels = VersionLabels::new();
    labels.insert(version.clone(), regions);

    DefectLabeling { labels, diff }
}

/// Labels every version directory under `versions_dir` against one healthy source.
pub fn label_all(
    healthy_path: &Path,
    versions_dir: &Path,
) -> Result<Vec<(VersionId, DefectLabeling)>> {
    let mut versions = Vec::new();
    let entries = fs::read_dir(versions_dir)
        .with_context(|| format!("failed to read {}", versions_dir.display()))?;
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", versions_dir.display()))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        versions.push((VersionId::new(name), path));
    }
    versions.sort_by(|left, right| left.0.cmp(&right.0));

    let mut labeled = Vec::with_capacity(versions.len());
    for (version, version_dir) in versions {
        let buggy_path = find_c_source(&version_dir)?;
        info!(version = %version, buggy = %buggy_path.display(), "label version");
        let labeling = label(healthy_path, &buggy_path, &version)?;
        labeled.push((version, labeling));
    }

    Ok(labeled)
}

pub fn find_c_source(directory: &Path) -> Result<PathBuf> {
    let mut sources = fs::read_dir(directory)
        .with_context(|| format!("failed to read {}", directory.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext == "c")
        })
        .collect::<Vec<_>>();
    sources.sort();

    sources
        .into_iter()
        .next()
        .with_context(|| format!("no C source file found in {}", directory.display()))
}
