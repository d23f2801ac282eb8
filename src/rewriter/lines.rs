use super::types::SourceLine;

/// Split text into physical lines, keeping each line's terminator so the
/// text can be reassembled byte for byte.
pub fn split_source_lines(text: &str) -> Vec<SourceLine<'_>> {
    text.split_inclusive('\n')
        .map(|raw| {
            let cut = if raw.ends_with("\r\n") {
                raw.len() - 2
            } else if raw.ends_with('\n') {
                raw.len() - 1
            } else {
                raw.len()
            };
            let (body, ending) = raw.split_at(cut);
            SourceLine { body, ending }
        })
        .collect()
}
