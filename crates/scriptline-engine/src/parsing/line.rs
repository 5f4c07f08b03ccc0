use serde::Serialize;
use uuid::Uuid;

use super::{inline::Formatting, kind::LineKind};

/// Opaque identity of a line, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineId(Uuid);

impl LineId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

/// One classified line of a screenplay.
#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub id: LineId,
    /// Raw line text without the trailing `\n`.
    pub text: String,
    pub kind: LineKind,
    /// Byte offset of the first character in the full document.
    pub offset: usize,
    pub formatting: Formatting,
    /// Scene number for headings, forced (`#12A#`) or counted.
    pub scene_number: Option<String>,
    /// Scene color taken from a `[[COLOR name]]` note on a heading.
    pub color: Option<String>,
    /// Pre-edit text kept by editors for diffing. The parser never sets it.
    pub original_text: Option<String>,
    /// Lowercase key of the title page entry this line belongs to.
    pub title_page_key: Option<String>,
}

impl Line {
    /// A fresh line with no kind decided yet (`Action` until classified).
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            id: LineId::new(),
            text: text.into(),
            kind: LineKind::Action,
            offset,
            formatting: Formatting::default(),
            scene_number: None,
            color: None,
            original_text: None,
            title_page_key: None,
        }
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Offset one past the last byte of this line (excluding the newline).
    pub fn end_offset(&self) -> usize {
        self.offset + self.text.len()
    }

    /// The speaker name for a character cue.
    ///
    /// Strips a leading `@`, a trailing `^` and any `(V.O.)`-style extension,
    /// then uppercases. Returns `None` for lines that aren't cues.
    pub fn character_name(&self) -> Option<String> {
        if !self.kind.is_character() {
            return None;
        }
        let name = strip_cue_decorations(self.trimmed());
        let name = name.strip_prefix('@').unwrap_or(name).trim();
        (!name.is_empty()).then(|| name.to_uppercase())
    }
}

/// Removes a trailing dual-dialogue `^` and a parenthetical extension.
pub(crate) fn strip_cue_decorations(cue: &str) -> &str {
    let cue = cue.trim_end();
    let cue = cue.strip_suffix('^').unwrap_or(cue);
    let cue = match cue.find('(') {
        Some(paren) => &cue[..paren],
        None => cue,
    };
    cue.trim()
}
