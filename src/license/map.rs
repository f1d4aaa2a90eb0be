use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use crate::config::LegalPaths;

/// A `licenses` entry: one text file or several.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LicensePaths {
    Single(PathBuf),
    Many(Vec<PathBuf>),
}

impl LicensePaths {
    pub fn into_vec(self) -> Vec<PathBuf> {
        match self {
            LicensePaths::Single(path) => vec![path],
            LicensePaths::Many(paths) => paths,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LicenseMapFile {
    #[serde(default)]
    licenses: IndexMap<String, LicensePaths>,
}

/// License identifier -> files holding that license's text, in document order.
#[derive(Debug, Clone, Default)]
pub struct LicenseMap {
    entries: IndexMap<String, Vec<PathBuf>>,
}

impl LicenseMap {
    pub fn load(paths: &LegalPaths) -> Result<Self> {
        let map_path = paths.resolve(&paths.license_map);
        if !map_path.exists() {
            anyhow::bail!("Missing license map: {}", paths.license_map.display());
        }

        let content = fs::read_to_string(&map_path)
            .with_context(|| format!("Failed to read license map: {}", paths.license_map.display()))?;

        let map = Self::parse(&content)
            .with_context(|| format!("Failed to parse license map: {}", paths.license_map.display()))?;
        debug!(map = %paths.license_map.display(), entries = map.len(), "loaded license map");
        Ok(map)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: LicenseMapFile = toml::from_str(content)?;
        let entries = file
            .licenses
            .into_iter()
            .map(|(license_id, paths)| (license_id, paths.into_vec()))
            .collect();
        Ok(Self { entries })
    }

    pub fn contains(&self, license_id: &str) -> bool {
        self.entries.contains_key(license_id)
    }

    pub fn paths_for(&self, license_id: &str) -> &[PathBuf] {
        self.entries
            .get(license_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
