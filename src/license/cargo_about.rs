use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use tracing::debug;
use super::expression::parse_license_expression;
use super::CollectedLicenses;
use crate::config::LegalPaths;

/// Collect license identifiers from the `cargo about generate` JSON report.
pub fn collect_rust_licenses(paths: &LegalPaths) -> Result<CollectedLicenses> {
    let report_path = paths.resolve(&paths.cargo_about);
    if !report_path.exists() {
        anyhow::bail!(
            "expected {} to exist; run `cargo about generate` first",
            paths.cargo_about.display()
        );
    }

    let content = fs::read_to_string(&report_path)
        .with_context(|| format!("Failed to read {}", paths.cargo_about.display()))?;

    let collected = parse_cargo_about(&content, &paths.cargo_about.display().to_string())?;
    debug!(
        report = %paths.cargo_about.display(),
        licenses = collected.licenses.len(),
        skipped = collected.skipped.len(),
        "collected Rust dependency licenses"
    );
    Ok(collected)
}

/// Parse the report body. `source` names the report in skipped-entry labels.
pub fn parse_cargo_about(content: &str, source: &str) -> Result<CollectedLicenses> {
    let data: Value = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse {} as JSON", source))?;

    let mut collected = CollectedLicenses::default();
    let entries = data
        .get("crates")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for (index, entry) in entries.iter().enumerate() {
        let expr = match entry {
            Value::Object(_) => non_empty_str(entry.get("license"))
                .or_else(|| non_empty_str(entry.get("license-expression"))),
            _ => None,
        };

        match expr {
            Some(expr) => collected.licenses.extend(parse_license_expression(expr)),
            None => collected.skipped.push(format!("{}: {}", source, crate_label(entry, index))),
        }
    }

    Ok(collected)
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|expr| !expr.trim().is_empty())
}

/// `name version` from the entry's package block when available.
fn crate_label(entry: &Value, index: usize) -> String {
    let package = entry.get("package").unwrap_or(entry);
    let name = package.get("name").and_then(Value::as_str);
    let version = package.get("version").and_then(Value::as_str);

    match (name, version) {
        (Some(name), Some(version)) => format!("{} {}", name, version),
        (Some(name), None) => name.to_string(),
        _ => format!("crates[{}]", index),
    }
}
