use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Bold, Escape, Italic, Note, Omitted, Paired, Strikeout, Underline},
    types::Formatting,
};

/// Extracts every formatting span on one line.
///
/// Categories are scanned independently of each other, so spans from
/// different categories may nest or overlap. Unmatched openers are ignored
/// and stop the scan for their category.
pub fn extract_formatting(line: &str) -> Formatting {
    Formatting {
        bold: scan_paired::<Bold>(line),
        italic: scan_italic(line),
        underline: scan_paired::<Underline>(line),
        note: scan_paired::<Note>(line),
        omitted: scan_paired::<Omitted>(line),
        strikeout: scan_paired::<Strikeout>(line),
        escape: scan_escapes(line),
    }
}

/// Left-to-right scan for `OPEN ... CLOSE` pairs.
///
/// The close is searched strictly after the opening delimiter and scanning
/// resumes right after the close, so spans never overlap.
fn scan_paired<P: Paired>(line: &str) -> Vec<Span> {
    let cur = Cursor::new(line);
    let mut out = vec![];
    let mut from = 0;

    while let Some(open) = cur.find_from(from, P::OPEN) {
        let Some(close) = cur.find_from(open + P::OPEN.len(), P::CLOSE) else {
            break;
        };
        let end = close + P::CLOSE.len();
        out.push(Span::new(open, end));
        from = end;
    }
    out
}

/// Like [`scan_paired`] for a single `*`, skipping any star that touches
/// another star so bold delimiters never pair up as italics.
fn scan_italic(line: &str) -> Vec<Span> {
    let cur = Cursor::new(line);
    let mut out = vec![];
    let mut from = 0;

    while let Some(open) = next_lone_star(&cur, from) {
        let Some(close) = next_lone_star(&cur, open + 1) else {
            break;
        };
        out.push(Span::new(open, close + 1));
        from = close + 1;
    }
    out
}

fn next_lone_star(cur: &Cursor<'_>, from: usize) -> Option<usize> {
    let mut at = from;
    while let Some(pos) = cur.find_from(at, &[Italic::STAR]) {
        let before = pos.checked_sub(1).and_then(|p| cur.byte_at(p));
        let after = cur.byte_at(pos + 1);
        if before != Some(Italic::STAR) && after != Some(Italic::STAR) {
            return Some(pos);
        }
        at = pos + 1;
    }
    None
}

/// Records `\x` pairs where `x` is a markup character.
fn scan_escapes(line: &str) -> Vec<Span> {
    let mut cur = Cursor::new(line);
    let mut out = vec![];

    while !cur.eof() {
        if cur.peek() == Some(Escape::BACKSLASH)
            && let Some(next) = cur.byte_at(cur.pos() + 1)
            && Escape::escapes(next)
        {
            let start = cur.pos();
            cur.seek(start + 2);
            out.push(Span::new(start, start + 2));
            continue;
        }
        cur.bump();
    }
    out
}
