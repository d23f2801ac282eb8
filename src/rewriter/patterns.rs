use super::types::{CallKind, OpeningMatch};
use crate::error::Result;
use regex::Regex;

const PLAIN_CALL: &str = r"^(\s*)(logger\.(?:warn|info|debug))\('([^']*)', \{$";
const ERROR_CALL: &str = r"^(\s*)(logger\.error)\('([^']*)', (.*?), \{$";

const CLOSING_DELIMITER: &str = "});";
const CLOSING_REPLACEMENT: &str = "} });";

/// The two compiled opening patterns.
#[derive(Debug, Clone)]
pub struct LogCallPatterns {
    plain: Regex,
    error: Regex,
}

impl LogCallPatterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            plain: Regex::new(PLAIN_CALL)?,
            error: Regex::new(ERROR_CALL)?,
        })
    }

    /// Match a line body (no terminator) against the plain pattern first,
    /// then the error pattern.
    pub fn match_opening(&self, line: &str) -> Option<OpeningMatch> {
        if let Some(caps) = self.plain.captures(line) {
            return Some(OpeningMatch {
                kind: CallKind::Plain,
                indent: caps[1].to_string(),
                call: caps[2].to_string(),
                message: caps[3].to_string(),
                error_expr: None,
            });
        }

        let caps = self.error.captures(line)?;
        Some(OpeningMatch {
            kind: CallKind::Error,
            indent: caps[1].to_string(),
            call: caps[2].to_string(),
            message: caps[3].to_string(),
            error_expr: Some(caps[4].to_string()),
        })
    }
}

impl OpeningMatch {
    /// Rebuild the opening line with the object literal nested under `wrapper_key`.
    pub fn render(&self, wrapper_key: &str) -> String {
        match &self.error_expr {
            Some(err) => format!(
                "{}{}('{}', {}, {{ {}: {{",
                self.indent, self.call, self.message, err, wrapper_key
            ),
            None => format!(
                "{}{}('{}', {{ {}: {{",
                self.indent, self.call, self.message, wrapper_key
            ),
        }
    }
}

/// A line that is only `});`, surrounding whitespace ignored.
pub fn is_closing_delimiter(line: &str) -> bool {
    line.trim() == CLOSING_DELIMITER
}

/// Close the wrapper object as well as the call. Indentation is kept.
pub fn rewrite_closing_line(line: &str) -> String {
    line.replacen(CLOSING_DELIMITER, CLOSING_REPLACEMENT, 1)
}
