use anyhow::Result;
use std::path::Path;
use tracing::info;
use super::OutputOptions;
use legal_audit::config::load_config;
use legal_audit::license::{check_licenses, LICENSES_CHECK};
use legal_audit::notice::{check_notice, NOTICE_CHECK};

/// Both checks run even when the first one cannot start.
pub fn handle_all(root: &Path, strict: bool, output: &OutputOptions) -> Result<i32> {
    let config = load_config(root)?;
    let strict = strict || config.strict();
    let paths = config.resolve(root);

    let runs = [
        (LICENSES_CHECK, check_licenses(&paths, strict)),
        (NOTICE_CHECK, check_notice(&paths)),
    ];

    let exit_code = output.emit(&runs)?;
    info!(exit_code, "legal checks finished");
    Ok(exit_code)
}
