use serde::Serialize;

use crate::parsing::span::Span;

/// Inline formatting categories tracked per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatCategory {
    Bold,
    Italic,
    Underline,
    Note,
    Omitted,
    Strikeout,
    Escape,
}

impl FormatCategory {
    pub const ALL: [FormatCategory; 7] = [
        FormatCategory::Bold,
        FormatCategory::Italic,
        FormatCategory::Underline,
        FormatCategory::Note,
        FormatCategory::Omitted,
        FormatCategory::Strikeout,
        FormatCategory::Escape,
    ];
}

/// The formatting spans found on one line, one list per category.
///
/// Spans include their delimiters and are byte offsets local to the line.
/// Each list is in left-to-right order and its spans never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Formatting {
    pub bold: Vec<Span>,
    pub italic: Vec<Span>,
    pub underline: Vec<Span>,
    pub note: Vec<Span>,
    pub omitted: Vec<Span>,
    pub strikeout: Vec<Span>,
    pub escape: Vec<Span>,
}

impl Formatting {
    pub fn get(&self, category: FormatCategory) -> &[Span] {
        match category {
            FormatCategory::Bold => &self.bold,
            FormatCategory::Italic => &self.italic,
            FormatCategory::Underline => &self.underline,
            FormatCategory::Note => &self.note,
            FormatCategory::Omitted => &self.omitted,
            FormatCategory::Strikeout => &self.strikeout,
            FormatCategory::Escape => &self.escape,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormatCategory::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}
