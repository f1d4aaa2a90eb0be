pub mod config;
pub mod license;
pub mod notice;
pub mod outcome;
pub mod output;

// Re-export main types for easy access
pub use config::{Config, LegalPaths};
pub use license::{check_licenses, LicenseMap};
pub use notice::check_notice;
pub use outcome::{CheckOutcome, Failure};
