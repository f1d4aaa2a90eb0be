use anyhow::Result;
use std::collections::BTreeSet;
use tracing::debug;
use crate::config::LegalPaths;
use crate::outcome::{CheckOutcome, Failure};

pub mod cargo_about;
pub mod expression;
pub mod go_licenses;
pub mod map;

pub use cargo_about::collect_rust_licenses;
pub use expression::parse_license_expression;
pub use go_licenses::collect_go_licenses;
pub use map::LicenseMap;

pub const LICENSES_CHECK: &str = "licenses";

pub const SKIPPED_ENTRIES: &str = "Report entries without a license identifier";
pub const UNMAPPED_LICENSES: &str = "No license text registered for";
pub const MISSING_LICENSE_FILES: &str = "License map references missing files";

/// Identifiers gathered from one dependency report, plus labels for the
/// entries that carried no usable license field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedLicenses {
    pub licenses: BTreeSet<String>,
    pub skipped: Vec<String>,
}

/// Verify that every license in the Rust and Go reports has license text on disk.
///
/// Missing or unreadable inputs are returned as errors; violations end up in
/// the outcome. In strict mode report entries without a license identifier
/// are violations too.
pub fn check_licenses(paths: &LegalPaths, strict: bool) -> Result<CheckOutcome> {
    let license_map = LicenseMap::load(paths)?;
    let rust = collect_rust_licenses(paths)?;
    let go = collect_go_licenses(paths)?;

    let mut outcome = CheckOutcome::new(LICENSES_CHECK);

    let skipped: Vec<String> = rust.skipped.into_iter().chain(go.skipped).collect();
    if strict && !skipped.is_empty() {
        outcome.fail(Failure::new(SKIPPED_ENTRIES, skipped));
    } else {
        for entry in &skipped {
            debug!(entry = %entry, "skipping report entry without a license identifier");
        }
    }

    let detected: BTreeSet<String> = rust.licenses.into_iter().chain(go.licenses).collect();
    debug!(detected = detected.len(), "detected dependency licenses");

    verify_license_map(&license_map, &detected, paths, &mut outcome);
    Ok(outcome)
}

/// Unmapped identifiers are reported first; file existence is only checked
/// once every detected identifier has an entry.
pub fn verify_license_map(
    license_map: &LicenseMap,
    detected: &BTreeSet<String>,
    paths: &LegalPaths,
    outcome: &mut CheckOutcome,
) {
    let unmapped: Vec<String> = detected
        .iter()
        .filter(|license_id| !license_map.contains(license_id))
        .cloned()
        .collect();

    if !unmapped.is_empty() {
        outcome.fail(Failure::new(UNMAPPED_LICENSES, unmapped));
        return;
    }

    let mut missing_files = Vec::new();
    for license_id in detected {
        for path in license_map.paths_for(license_id) {
            if !paths.resolve(path).exists() {
                missing_files.push(format!("{}: {}", license_id, path.display()));
            }
        }
    }

    if !missing_files.is_empty() {
        outcome.fail(Failure::new(MISSING_LICENSE_FILES, missing_files));
    }
}
