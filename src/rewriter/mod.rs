mod lines;
mod patterns;
mod rewrite;
mod types;

pub use lines::split_source_lines;
pub use patterns::{is_closing_delimiter, rewrite_closing_line, LogCallPatterns};
pub use rewrite::{rewrite_lines, rewrite_source};
pub use types::{CallKind, OpeningMatch, RewriteOutcome, RewriteReport, SourceLine};
