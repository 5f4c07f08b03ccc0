/*!
 * # Screenplay Document
 *
 * `Screenplay` is the façade editors and viewers talk to. It owns the
 * classified line list of one document and answers the queries the
 * presentation layer needs (scene headings, cues, character names, outline).
 *
 * ## Reparse Contract
 *
 * Every text change goes through [`Screenplay::reparse`], which runs the
 * complete pipeline from scratch. The new line list and title page are built
 * in full before they replace the old ones, so a reader never observes a
 * half-built document. There is no incremental update; hosts that reparse on
 * keystrokes are expected to debounce.
 *
 * ## Usage Pattern
 *
 * ```rust
 * use scriptline_engine::{LineKind, Screenplay};
 *
 * let mut script = Screenplay::parse("INT. HOUSE - DAY\n\nJOHN\nHello.");
 * assert_eq!(script.scene_headings().count(), 1);
 * assert_eq!(script.lines()[2].kind, LineKind::Character);
 *
 * script.reparse("EXT. GARDEN - NIGHT");
 * assert_eq!(script.text(), "EXT. GARDEN - NIGHT");
 * ```
 */

pub mod completion;

use std::collections::BTreeSet;

use crate::parsing::{Line, LineKind, ParsedDoc, TitlePage, parse_document};

#[derive(Debug, Clone)]
pub struct Screenplay {
    lines: Vec<Line>,
    title_page: TitlePage,
}

impl Default for Screenplay {
    fn default() -> Self {
        Self::parse("")
    }
}

impl Screenplay {
    pub fn parse(text: &str) -> Self {
        let ParsedDoc { lines, title_page } = parse_document(text);
        Self { lines, title_page }
    }

    /// Replaces the whole document with a fresh parse of `text`.
    pub fn reparse(&mut self, text: &str) {
        *self = Self::parse(text);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn title_page(&self) -> &TitlePage {
        &self.title_page
    }

    /// Shorthand for [`TitlePage::value`].
    pub fn title_page_value(&self, key: &str) -> Option<String> {
        self.title_page.value(key)
    }

    /// The document text, rebuilt by joining the line texts with `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn lines_of_kind(&self, kind: LineKind) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |l| l.kind == kind)
    }

    pub fn scene_headings(&self) -> impl Iterator<Item = &Line> {
        self.lines_of_kind(LineKind::Heading)
    }

    /// Character cues, including dual dialogue cues.
    pub fn character_cues(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.kind.is_character())
    }

    /// Unique speaker names, uppercased, with extensions and markers removed.
    pub fn character_names(&self) -> BTreeSet<String> {
        self.character_cues()
            .filter_map(Line::character_name)
            .collect()
    }

    /// Headings, sections and synopses in document order.
    pub fn outline(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.kind.is_outline())
    }

    /// Index of the line containing document byte `offset`.
    ///
    /// An offset on a line break belongs to the line before it; offsets past
    /// the end map to the last line.
    pub fn line_index_at(&self, offset: usize) -> usize {
        let after = self.lines.partition_point(|l| l.offset <= offset);
        after.saturating_sub(1)
    }

    pub fn line_at(&self, offset: usize) -> &Line {
        &self.lines[self.line_index_at(offset)]
    }
}
