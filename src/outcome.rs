use serde::{Deserialize, Serialize};

/// One class of violation found by a check, e.g. every unmapped license
/// identifier. Always carries at least one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub message: String,
    pub items: Vec<String>,
}

impl Failure {
    pub fn new(message: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            message: message.into(),
            items,
        }
    }

    /// Header line followed by one `- item` line per violation.
    pub fn render(&self) -> String {
        format!("{}:\n- {}", self.message, self.items.join("\n- "))
    }
}

/// Result of a single check run. Passing means no failures were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub check: &'static str,
    pub failures: Vec<Failure>,
}

impl CheckOutcome {
    pub fn new(check: &'static str) -> Self {
        Self {
            check,
            failures: Vec::new(),
        }
    }

    pub fn fail(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    pub fn render(&self) -> String {
        self.failures
            .iter()
            .map(Failure::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
