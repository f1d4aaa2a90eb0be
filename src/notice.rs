use anyhow::{Context, Result};
use std::fs;
use tracing::debug;
use crate::config::LegalPaths;
use crate::outcome::{CheckOutcome, Failure};

pub const NOTICE_CHECK: &str = "notice";

pub const MISSING_SNIPPETS: &str = "NOTICE is missing required attribution snippets";

/// Verify that the NOTICE document contains every required attribution snippet.
pub fn check_notice(paths: &LegalPaths) -> Result<CheckOutcome> {
    let contents = load_notice(paths)?;
    let snippets = load_required_snippets(paths)?;

    let mut outcome = CheckOutcome::new(NOTICE_CHECK);
    let missing: Vec<String> = find_missing_snippets(&snippets, &contents)
        .into_iter()
        .map(str::to_string)
        .collect();

    debug!(
        required = snippets.len(),
        missing = missing.len(),
        "checked NOTICE attributions"
    );

    if !missing.is_empty() {
        outcome.fail(Failure::new(MISSING_SNIPPETS, missing));
    }
    Ok(outcome)
}

pub fn load_notice(paths: &LegalPaths) -> Result<String> {
    let notice_path = paths.resolve(&paths.notice);
    if !notice_path.exists() {
        anyhow::bail!("NOTICE file missing: {}", paths.notice.display());
    }

    fs::read_to_string(&notice_path)
        .with_context(|| format!("Failed to read {}", paths.notice.display()))
}

/// Snippets in file order. An absent or effectively empty list is an error,
/// never a vacuous pass.
pub fn load_required_snippets(paths: &LegalPaths) -> Result<Vec<String>> {
    let snippets_path = paths.resolve(&paths.notice_snippets);
    if !snippets_path.exists() {
        anyhow::bail!("Required snippets file missing: {}", paths.notice_snippets.display());
    }

    let content = fs::read_to_string(&snippets_path)
        .with_context(|| format!("Failed to read {}", paths.notice_snippets.display()))?;

    let snippets = parse_snippets(&content);
    if snippets.is_empty() {
        anyhow::bail!("No snippets defined in {}", paths.notice_snippets.display());
    }
    Ok(snippets)
}

/// One snippet per trimmed line; blank lines and `#` comments are ignored.
pub fn parse_snippets(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn find_missing_snippets<'a>(snippets: &'a [String], contents: &str) -> Vec<&'a str> {
    snippets
        .iter()
        .map(String::as_str)
        .filter(|snippet| !contents.contains(snippet))
        .collect()
}
