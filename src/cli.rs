use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "legal-audit")]
#[command(about = "Check third-party license texts and NOTICE attributions before a release")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project root the conventional input paths are resolved against
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify every detected dependency license has license text on disk
    Licenses {
        /// Fail on report entries without a license identifier
        #[arg(long)]
        strict: bool,

        /// cargo-about JSON report
        #[arg(long)]
        cargo_about: Option<PathBuf>,

        /// go-licenses CSV report
        #[arg(long)]
        go_licenses: Option<PathBuf>,

        /// License identifier to license file mapping
        #[arg(long)]
        license_map: Option<PathBuf>,
    },
    /// Verify NOTICE contains every required attribution snippet
    Notice {
        /// Required snippets, one per line
        #[arg(long)]
        snippets: Option<PathBuf>,

        /// NOTICE document
        #[arg(long)]
        notice: Option<PathBuf>,
    },
    /// Run the license and NOTICE checks
    All {
        /// Fail on report entries without a license identifier
        #[arg(long)]
        strict: bool,
    },
    /// Show or validate configuration
    Config {
        /// Show resolved configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
