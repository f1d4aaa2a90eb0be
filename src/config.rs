use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

pub const DEFAULT_CARGO_ABOUT_JSON: &str = "target/legal/cargo-about.json";
pub const DEFAULT_GO_LICENSES_CSV: &str = "target/legal/go-licenses.csv";
pub const DEFAULT_LICENSE_MAP_TOML: &str = "docs/legal/license-files.toml";
pub const DEFAULT_NOTICE_SNIPPETS: &str = "docs/legal/notice-snippets.txt";
pub const DEFAULT_NOTICE: &str = "NOTICE";

/// Settings read from the `legal-audit` metadata table of the project's Cargo.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// `cargo about generate` JSON report
    pub cargo_about: Option<PathBuf>,

    /// `go-licenses report` CSV output
    pub go_licenses: Option<PathBuf>,

    /// License identifier -> license text file mapping
    pub license_map: Option<PathBuf>,

    /// Required NOTICE attribution snippets, one per line
    pub notice_snippets: Option<PathBuf>,

    /// NOTICE document scanned for the snippets
    pub notice: Option<PathBuf>,

    /// Treat report entries without a license identifier as failures
    pub strict: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cargo_about: Some(PathBuf::from(DEFAULT_CARGO_ABOUT_JSON)),
            go_licenses: Some(PathBuf::from(DEFAULT_GO_LICENSES_CSV)),
            license_map: Some(PathBuf::from(DEFAULT_LICENSE_MAP_TOML)),
            notice_snippets: Some(PathBuf::from(DEFAULT_NOTICE_SNIPPETS)),
            notice: Some(PathBuf::from(DEFAULT_NOTICE)),
            strict: Some(false),
        }
    }
}

impl Config {
    /// Fill unset values with the conventional locations and anchor them at `root`.
    pub fn resolve(&self, root: &Path) -> LegalPaths {
        let defaults = Config::default();
        let pick = |value: &Option<PathBuf>, fallback: Option<PathBuf>| {
            value.clone().or(fallback).unwrap_or_default()
        };

        LegalPaths {
            root: root.to_path_buf(),
            cargo_about: pick(&self.cargo_about, defaults.cargo_about),
            go_licenses: pick(&self.go_licenses, defaults.go_licenses),
            license_map: pick(&self.license_map, defaults.license_map),
            notice_snippets: pick(&self.notice_snippets, defaults.notice_snippets),
            notice: pick(&self.notice, defaults.notice),
        }
    }

    pub fn strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }
}

/// Input locations handed to each check. Paths are kept as configured so
/// diagnostics name them the way the operator wrote them; `resolve` anchors
/// a relative path at `root` for filesystem access.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegalPaths {
    pub root: PathBuf,
    pub cargo_about: PathBuf,
    pub go_licenses: PathBuf,
    pub license_map: PathBuf,
    pub notice_snippets: PathBuf,
    pub notice: PathBuf,
}

impl LegalPaths {
    /// Conventional locations under `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Config::default().resolve(root.as_ref())
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Load configuration from `<root>/Cargo.toml`.
///
/// `[workspace.metadata.legal-audit]` wins over `[package.metadata.legal-audit]`.
/// A missing manifest or section yields the defaults.
pub fn load_config(root: &Path) -> Result<Config> {
    let manifest_path = root.join("Cargo.toml");

    if !manifest_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read Cargo.toml: {}", manifest_path.display()))?;

    let manifest: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse Cargo.toml: {}", manifest_path.display()))?;

    for scope in ["workspace", "package"] {
        let section = manifest
            .get(scope)
            .and_then(|table| table.get("metadata"))
            .and_then(|metadata| metadata.get("legal-audit"));

        if let Some(section) = section {
            let config: Config = section.clone().try_into()
                .with_context(|| format!("Failed to parse [{}.metadata.legal-audit] section", scope))?;
            return Ok(config);
        }
    }

    Ok(Config::default())
}
