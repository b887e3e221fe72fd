use std::path::Path;

use anyhow::{Result, bail};

use crate::model::VersionLabels;
use crate::util::{read_json, write_json_pretty};

pub fn load_labels(path: &Path) -> Result<VersionLabels> {
    if !path.is_file() {
        bail!("labels file not found: {}", path.display());
    }
    read_json(path)
}

pub fn load_labels_or_default(path: &Path) -> Result<VersionLabels> {
    if path.exists() {
        load_labels(path)
    } else {
        Ok(VersionLabels::new())
    }
}

/// Replaces the entries of `fragment`'s versions in `labels`.
pub fn merge_labels(labels: &mut VersionLabels, fragment: VersionLabels) {
    labels.extend(fragment);
}

pub fn save_labels(path: &Path, labels: &VersionLabels) -> Result<()> {
    write_json_pretty(path, labels)
}
