use anyhow::Result;
use std::path::{Path, PathBuf};
use super::OutputOptions;
use legal_audit::config::load_config;
use legal_audit::notice::{check_notice, NOTICE_CHECK};

pub fn handle_notice(
    root: &Path,
    snippets: Option<PathBuf>,
    notice: Option<PathBuf>,
    output: &OutputOptions,
) -> Result<i32> {
    let mut config = load_config(root)?;
    config.notice_snippets = snippets.or(config.notice_snippets);
    config.notice = notice.or(config.notice);

    let paths = config.resolve(root);
    output.emit(&[(NOTICE_CHECK, check_notice(&paths))])
}
