use anyhow::Result;
use std::path::{Path, PathBuf};
use super::OutputOptions;
use legal_audit::config::load_config;
use legal_audit::license::{check_licenses, LICENSES_CHECK};

pub fn handle_licenses(
    root: &Path,
    strict: bool,
    cargo_about: Option<PathBuf>,
    go_licenses: Option<PathBuf>,
    license_map: Option<PathBuf>,
    output: &OutputOptions,
) -> Result<i32> {
    // Load configuration from Cargo.toml
    let mut config = load_config(root)?;

    // CLI arguments override config values
    config.cargo_about = cargo_about.or(config.cargo_about);
    config.go_licenses = go_licenses.or(config.go_licenses);
    config.license_map = license_map.or(config.license_map);
    let strict = strict || config.strict();

    let paths = config.resolve(root);
    output.emit(&[(LICENSES_CHECK, check_licenses(&paths, strict))])
}
