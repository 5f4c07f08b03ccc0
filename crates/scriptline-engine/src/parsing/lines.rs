use super::line::Line;

/// Splits document text into positioned, unclassified lines.
///
/// Only `\n` separates lines; a `\r` before it stays part of the line text,
/// so callers normalise line endings first. Empty input yields one empty
/// line at offset 0, and a trailing `\n` yields a final empty line.
pub fn segment(text: &str) -> Vec<Line> {
    let mut offset = 0usize;
    text.split('\n')
        .map(|raw| {
            let line = Line::new(raw, offset);
            offset += raw.len() + 1;
            line
        })
        .collect()
}
