pub mod all;
pub mod config;
pub mod licenses;
pub mod notice;

pub use all::handle_all;
pub use config::handle_config;
pub use licenses::handle_licenses;
pub use notice::handle_notice;

use anyhow::Result;
use crate::cli::OutputFormat;
use legal_audit::output::{format_json_output, format_text_output, CheckReport};
use legal_audit::CheckOutcome;

/// A finished check, or the setup error that stopped it.
pub type CheckRun = (&'static str, Result<CheckOutcome>);

pub struct OutputOptions {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl OutputOptions {
    /// Print every run and return the process exit code. A setup error counts as a failure.
    pub fn emit(&self, runs: &[CheckRun]) -> Result<i32> {
        let exit_code = runs
            .iter()
            .map(|(_, result)| result.as_ref().map_or(1, CheckOutcome::exit_code))
            .max()
            .unwrap_or(0);

        if self.quiet {
            return Ok(exit_code);
        }

        match self.format {
            OutputFormat::Text => {
                for (_, result) in runs {
                    match result {
                        Ok(outcome) if !outcome.passed() => eprintln!("{}", format_text_output(outcome)),
                        Ok(_) => {}
                        Err(e) => eprintln!("Error: {:#}", e),
                    }
                }
            }
            OutputFormat::Json => {
                let reports: Vec<CheckReport> = runs
                    .iter()
                    .map(|(check, result)| match result {
                        Ok(outcome) => CheckReport::from_outcome(outcome),
                        Err(e) => CheckReport::from_error(check, e),
                    })
                    .collect();
                println!("{}", format_json_output(&reports)?);
            }
        }

        Ok(exit_code)
    }
}
