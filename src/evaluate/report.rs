use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::model::{PluginFailure, PluginResult};

/// Diagnostic tool output with each plugin decoded on its own.
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    pub executed_statements_count: usize,
    pub statements_count: Option<usize>,
    pub plugins: Vec<PluginResult>,
    pub failures: Vec<PluginFailure>,
}

pub fn load_report(path: &Path) -> Result<DiagnosticReport> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    parse_report(&value).with_context(|| format!("invalid diagnostic report {}", path.display()))
}

pub fn parse_report(value: &Value) -> Result<DiagnosticReport> {
    let executed_statements_count = match value
        .get("executed_statements_count")
        .and_then(Value::as_u64)
    {
        Some(count) if count > 0 => usize::try_from(count)
            .context("executed_statements_count does not fit in usize")?,
        _ => bail!("executed_statements_count must be a positive integer"),
    };

    let statements_count = value
        .get("statements_count")
        .and_then(Value::as_u64)
        .and_then(|count| usize::try_from(count).ok());

    let Some(entries) = value.get("plugins").and_then(Value::as_array) else {
        bail!("plugins must be an array");
    };

    let mut plugins = Vec::with_capacity(entries.len());
    let mut failures = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let name = entry
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("plugin #{}", index + 1));

        match serde_json::from_value::<PluginResult>(entry.clone()) {
            Ok(plugin) => plugins.push(plugin),
            Err(err) => failures.push(PluginFailure {
                name,
                reason: err.to_string(),
            }),
        }
    }

    Ok(DiagnosticReport {
        executed_statements_count,
        statements_count,
        plugins,
        failures,
    })
}
