use super::lines::split_source_lines;
use super::patterns::{is_closing_delimiter, rewrite_closing_line, LogCallPatterns};
use super::types::{CallKind, RewriteOutcome, RewriteReport, SourceLine};
use crate::config::DEFAULT_WRAPPER_KEY;
use crate::error::Result;
use log::debug;

/// Single pass over the lines. Each input line produces exactly one output
/// line; only opening calls and their closing `});` change.
pub fn rewrite_lines(
    lines: &[SourceLine<'_>],
    patterns: &LogCallPatterns,
    wrapper_key: &str,
) -> RewriteOutcome {
    let mut out = String::with_capacity(lines.iter().map(|l| l.body.len() + 16).sum());
    let mut report = RewriteReport {
        total_lines: lines.len(),
        ..RewriteReport::default()
    };
    let mut i = 0usize;

    while i < lines.len() {
        let line = &lines[i];

        let Some(opening) = patterns.match_opening(line.body) else {
            push_line(&mut out, line.body, line.ending);
            i += 1;
            continue;
        };

        debug!("line {}: wrapping {} call", i + 1, opening.call);
        push_line(&mut out, &opening.render(wrapper_key), line.ending);
        let opened_at = i + 1;
        i += 1;

        // Copy the block through untouched until its `});`
        let mut closed = false;
        while i < lines.len() {
            let inner = &lines[i];
            i += 1;
            if is_closing_delimiter(inner.body) {
                debug!("line {}: closing wrapped call", i);
                push_line(&mut out, &rewrite_closing_line(inner.body), inner.ending);
                closed = true;
                break;
            }
            push_line(&mut out, inner.body, inner.ending);
        }

        if !closed {
            report.unterminated_at = Some(opened_at);
            break;
        }

        match opening.kind {
            CallKind::Plain => report.plain_blocks += 1,
            CallKind::Error => report.error_blocks += 1,
        }
    }

    RewriteOutcome { text: out, report }
}

/// Rewrite a whole text with the default `data` wrapper key.
pub fn rewrite_source(text: &str) -> Result<RewriteOutcome> {
    let patterns = LogCallPatterns::new()?;
    let lines = split_source_lines(text);
    Ok(rewrite_lines(&lines, &patterns, DEFAULT_WRAPPER_KEY))
}

fn push_line(out: &mut String, body: &str, ending: &str) {
    out.push_str(body);
    out.push_str(ending);
}
