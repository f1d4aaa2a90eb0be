use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use legal_audit::config::{load_config, LegalPaths};

#[derive(Serialize)]
struct ResolvedConfig {
    #[serde(flatten)]
    paths: LegalPaths,
    strict: bool,
}

pub fn handle_config(root: &Path, show: bool, validate: bool, quiet: bool) -> Result<i32> {
    if !show && !validate {
        if !quiet {
            eprintln!("Use --show or --validate");
        }
        return Ok(1);
    }

    let config = match load_config(root) {
        Ok(config) => config,
        Err(e) => {
            if !quiet {
                eprintln!("❌ Configuration validation failed: {:#}", e);
            }
            return Ok(1);
        }
    };

    if show && !quiet {
        let resolved = ResolvedConfig {
            paths: config.resolve(root),
            strict: config.strict(),
        };
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    }

    if validate && !quiet {
        println!("✅ Configuration is valid");
    }

    Ok(0)
}
