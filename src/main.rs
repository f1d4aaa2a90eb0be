use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{handle_all, handle_config, handle_licenses, handle_notice, OutputOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let output = OutputOptions {
        format: cli.format.unwrap_or_default(),
        quiet: cli.quiet,
    };

    let exit_code = match cli.command {
        Commands::Licenses {
            strict,
            cargo_about,
            go_licenses,
            license_map,
        } => handle_licenses(&cli.root, strict, cargo_about, go_licenses, license_map, &output)?,
        Commands::Notice { snippets, notice } => {
            handle_notice(&cli.root, snippets, notice, &output)?
        }
        Commands::All { strict } => handle_all(&cli.root, strict, &output)?,
        Commands::Config { show, validate } => {
            handle_config(&cli.root, show, validate, cli.quiet)?
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` takes precedence over the verbosity flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
