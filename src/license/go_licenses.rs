use anyhow::{Context, Result};
use std::fs;
use tracing::debug;
use super::CollectedLicenses;
use crate::config::LegalPaths;

/// Collect license identifiers from the `go-licenses report` CSV output.
pub fn collect_go_licenses(paths: &LegalPaths) -> Result<CollectedLicenses> {
    let report_path = paths.resolve(&paths.go_licenses);
    if !report_path.exists() {
        anyhow::bail!(
            "expected {} to exist; run `go-licenses report` first",
            paths.go_licenses.display()
        );
    }

    let content = fs::read_to_string(&report_path)
        .with_context(|| format!("Failed to read {}", paths.go_licenses.display()))?;

    let collected = parse_go_licenses(&content, &paths.go_licenses.display().to_string());
    debug!(
        report = %paths.go_licenses.display(),
        licenses = collected.licenses.len(),
        skipped = collected.skipped.len(),
        "collected Go dependency licenses"
    );
    Ok(collected)
}

/// Rows are `module,license-url,license-id`; only the third column is used.
pub fn parse_go_licenses(content: &str, source: &str) -> CollectedLicenses {
    let mut collected = CollectedLicenses::default();

    for (line, row) in read_records(content) {
        match row.get(2).map(|field| field.trim()) {
            Some(license_id) if !license_id.is_empty() => {
                collected.licenses.insert(license_id.to_string());
            }
            _ => {
                let module = row.first().map(String::as_str).unwrap_or_default();
                collected.skipped.push(format!("{}:{}: {}", source, line, module));
            }
        }
    }

    collected
}

/// Minimal RFC 4180 reader: quoted fields may hold commas, doubled quotes and
/// newlines. A quote only opens quoting at the start of a field; elsewhere it
/// is literal. Yields each non-blank record with the line it starts on.
fn read_records(content: &str) -> Vec<(usize, Vec<String>)> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                if !fields.is_empty() || !field.is_empty() {
                    fields.push(std::mem::take(&mut field));
                    records.push((record_line, std::mem::take(&mut fields)));
                }
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if !fields.is_empty() || !field.is_empty() {
        fields.push(field);
        records.push((record_line, fields));
    }

    records
}
