use crate::config::RewriteConfig;
use crate::error::{Result, RewriteError};
use crate::rewriter::{rewrite_lines, split_source_lines, LogCallPatterns, RewriteReport};
use log::{info, warn};
use std::fs;

/// Read the configured target in full, rewrite it and overwrite it in place.
///
/// A read failure aborts before anything is written. An unterminated block is
/// not an error: the remaining lines are kept verbatim and the report says
/// where the block opened.
pub fn rewrite_file(config: &RewriteConfig) -> Result<RewriteReport> {
    let path = &config.target;
    let contents = fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.clone(),
        source,
    })?;

    let patterns = LogCallPatterns::new()?;
    let lines = split_source_lines(&contents);
    let outcome = rewrite_lines(&lines, &patterns, &config.wrapper_key);

    fs::write(path, outcome.text.as_bytes()).map_err(|source| RewriteError::Write {
        path: path.clone(),
        source,
    })?;

    let report = outcome.report;
    if let Some(line) = report.unterminated_at {
        warn!(
            "{}: call opened at line {} has no closing `}});`, left as is",
            path.display(),
            line
        );
    }
    info!(
        "{}: {} lines, {} calls wrapped ({} plain, {} error)",
        path.display(),
        report.total_lines,
        report.blocks_rewritten(),
        report.plain_blocks,
        report.error_blocks
    );

    Ok(report)
}
