//! # Screenplay Parsing
//!
//! Turns plain screenplay text into classified lines.
//!
//! ## Pipeline
//!
//! 1. **Segmentation** (`lines`): split on `\n` into positioned `Line`s
//! 2. **Title page** (`title_page`): a leading `Key: value` block, if line 0
//!    is a key line
//! 3. **Classification** (`classify`): one front-to-back pass assigning a
//!    `LineKind` to every remaining line
//! 4. **Formatting** (`inline`): per-line emphasis/note/omitted spans
//! 5. **Scenes** (`scene`): heading numbers and colors
//!
//! Every call parses the whole text. There is no incremental path; hosts
//! that parse on each keystroke should debounce.

pub mod classify;
pub mod inline;
pub mod kind;
pub mod line;
pub mod lines;
pub mod scene;
pub mod snapshot;
pub mod span;
pub mod title_page;

#[cfg(test)]
mod tests;

pub use classify::LineClassifier;
pub use inline::{FormatCategory, Formatting, extract_formatting};
pub use kind::LineKind;
pub use line::{Line, LineId};
pub use span::Span;
pub use title_page::{TitleEntry, TitlePage};

#[derive(Debug, Clone, Default)]
pub struct ParsedDoc {
    pub lines: Vec<Line>,
    pub title_page: TitlePage,
}

/// Parses a complete document. Never fails: every line gets a kind.
pub fn parse_document(text: &str) -> ParsedDoc {
    let mut lines = lines::segment(text);
    let body_start = title_page::parse_title_page(&mut lines);

    let classifier = LineClassifier;
    for index in body_start..lines.len() {
        let kind = classifier.classify(&lines, index);
        lines[index].kind = kind;
    }

    for line in &mut lines {
        line.formatting = extract_formatting(&line.text);
    }
    scene::annotate_scenes(&mut lines);
    let title_page = TitlePage::from_lines(&lines[..body_start]);

    log::debug!(
        "parsed {} lines ({} title page, {} bytes)",
        lines.len(),
        body_start,
        text.len()
    );

    ParsedDoc { lines, title_page }
}
