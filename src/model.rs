use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Insert,
    Delete,
    Replace,
}

/// Line range of the buggy file that diverges from the healthy file.
///
/// Regions labeled by hand carry no kind; the field is omitted from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectRegion {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RegionKind>,
    pub line_begin: usize,
    pub line_end: usize,
}

/// Version identifier that orders `v2` before `v10`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionId(String);

impl VersionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric_suffix(&self) -> Option<u64> {
        self.0.strip_prefix('v')?.parse::<u64>().ok()
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for VersionId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric_suffix(), other.numeric_suffix()) {
            (Some(left), Some(right)) => left.cmp(&right).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for VersionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub type VersionLabels = BTreeMap<VersionId, Vec<DefectRegion>>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub line_begin: usize,
    pub line_end: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspiciousnessItem {
    pub location: Location,
    pub suspiciousness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginResult {
    pub name: String,
    pub results: Vec<SuspiciousnessItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationScore {
    pub best: usize,
    pub worst: usize,
    #[serde(rename = "EXAM best")]
    pub exam_best: f64,
    #[serde(rename = "EXAM worst")]
    pub exam_worst: f64,
    #[serde(rename = "hit@5 best")]
    pub hit5_best: u8,
    #[serde(rename = "hit@5 worst")]
    pub hit5_worst: u8,
    #[serde(rename = "hit@10 best")]
    pub hit10_best: u8,
    #[serde(rename = "hit@10 worst")]
    pub hit10_worst: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginScore {
    pub name: String,
    #[serde(flatten)]
    pub score: EvaluationScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginFailure {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TieWarning {
    pub plugin: String,
    pub rank: usize,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceDigest {
    pub path: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRunManifest {
    pub manifest_version: u32,
    pub version: String,
    pub generated_at: String,
    pub executed_statements_count: usize,
    pub statements_count: Option<usize>,
    pub inputs: Vec<SourceDigest>,
    pub scores: Vec<PluginScore>,
    pub plugin_failures: Vec<PluginFailure>,
    pub tie_warnings: Vec<TieWarning>,
}
