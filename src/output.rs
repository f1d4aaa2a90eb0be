use serde::Serialize;
use crate::outcome::{CheckOutcome, Failure};

/// Machine-readable form of one check run, as printed by `--format json`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub check: String,
    pub passed: bool,
    /// Setup error that stopped the check before it could validate anything
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub failures: Vec<Failure>,
}

impl CheckReport {
    pub fn from_outcome(outcome: &CheckOutcome) -> Self {
        Self {
            check: outcome.check.to_string(),
            passed: outcome.passed(),
            error: None,
            failures: outcome.failures.clone(),
        }
    }

    pub fn from_error(check: &str, error: &anyhow::Error) -> Self {
        Self {
            check: check.to_string(),
            passed: false,
            error: Some(format!("{:#}", error)),
            failures: Vec::new(),
        }
    }
}

/// Diagnostics for stderr: one block per failure class, empty when passing.
pub fn format_text_output(outcome: &CheckOutcome) -> String {
    outcome.render()
}

pub fn format_json_output(reports: &[CheckReport]) -> serde_json::Result<String> {
    match reports {
        [report] => serde_json::to_string_pretty(report),
        _ => serde_json::to_string_pretty(reports),
    }
}
