use serde::Serialize;

/// One physical line split off the input, terminator kept aside.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine<'a> {
    pub body: &'a str,
    pub ending: &'a str,
}

/// Which opening pattern a call line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Plain, // logger.info / warn / debug
    Error, // logger.error with an error argument
}

/// Captures of a matched opening line.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningMatch {
    pub kind: CallKind,
    pub indent: String,
    pub call: String,
    pub message: String,
    pub error_expr: Option<String>,
}

/// Counters gathered during a single rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RewriteReport {
    pub total_lines: usize,
    pub plain_blocks: usize,
    pub error_blocks: usize,
    /// 1-based line of an opening call whose `});` never showed up.
    pub unterminated_at: Option<usize>,
}

impl RewriteReport {
    pub fn blocks_rewritten(&self) -> usize {
        self.plain_blocks + self.error_blocks
    }
}

/// Output of a rewrite: the new text plus what happened to it.
#[derive(Debug)]
pub struct RewriteOutcome {
    pub text: String,
    pub report: RewriteReport,
}
