use std::sync::LazyLock;

use regex::Regex;

use super::{kind::LineKind, line::Line, line::strip_cue_decorations};

/// Scene heading prefixes, matched case-insensitively in this order.
pub const SCENE_HEADING_PREFIXES: &[&str] = &[
    "INT.", "EXT.", "INT/EXT.", "EXT/INT.", "I/E.", "E/I.", "INT ", "EXT ", "INT/EXT ",
    "EXT/INT ", "I/E ", "E/I ",
];

/// Uppercase endings that mark an unforced transition.
pub const TRANSITION_SUFFIXES: &[&str] = &["TO:", "TO BLACK.", "TO WHITE."];

static PAGE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^={3,}\s*$").expect("valid page break pattern"));

/// Assigns a [`LineKind`] to each body line.
///
/// Rules are tried in a fixed order and the first match wins. Some rules
/// look at the kinds already assigned to earlier lines, so lines must be
/// classified front to back.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies `lines[index]`. Lines before `index` must already carry
    /// their final kind; only the raw text of later lines is consulted.
    pub fn classify(&self, lines: &[Line], index: usize) -> LineKind {
        let trimmed = lines[index].trimmed();

        if trimmed.is_empty() {
            return LineKind::Empty;
        }
        if trimmed.starts_with('#') {
            return LineKind::Section;
        }
        if trimmed.starts_with('=') && !trimmed.starts_with("===") {
            return LineKind::Synopsis;
        }
        if PAGE_BREAK.is_match(trimmed) {
            return LineKind::PageBreak;
        }
        if trimmed.starts_with('>') && trimmed.ends_with('<') {
            return LineKind::Centered;
        }
        if is_forced_heading(trimmed) || has_scene_prefix(trimmed) {
            return LineKind::Heading;
        }
        if trimmed.starts_with('@') {
            return if trimmed.ends_with('^') {
                LineKind::DualDialogueCharacter
            } else {
                LineKind::Character
            };
        }
        if trimmed.starts_with('>') || is_transition(trimmed) {
            return LineKind::Transition;
        }
        if trimmed.starts_with('~') {
            return LineKind::Lyrics;
        }
        if let Some(kind) = character_cue(lines, index) {
            return kind;
        }

        if let Some(speaker) = previous_non_empty(lines, index)
            && speaker.kind.is_dialogue_block()
        {
            let dual = speaker.kind.is_dual();
            let parenthetical = trimmed.starts_with('(') && trimmed.ends_with(')');
            return match (parenthetical, dual) {
                (true, false) => LineKind::Parenthetical,
                (true, true) => LineKind::DualDialogueParenthetical,
                (false, false) => LineKind::Dialogue,
                (false, true) => LineKind::DualDialogue,
            };
        }

        LineKind::Action
    }
}

/// `.FLASHBACK` but not `...`
fn is_forced_heading(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    chars.next() == Some('.') && chars.next() != Some('.')
}

pub fn has_scene_prefix(trimmed: &str) -> bool {
    scene_prefix(trimmed).is_some()
}

/// The scene heading prefix `text` starts with, ignoring case.
pub fn scene_prefix(text: &str) -> Option<&'static str> {
    let upper = text.to_uppercase();
    SCENE_HEADING_PREFIXES
        .iter()
        .find(|p| upper.starts_with(*p))
        .copied()
}

fn is_transition(trimmed: &str) -> bool {
    let upper = trimmed.to_uppercase();
    TRANSITION_SUFFIXES.iter().any(|s| upper.ends_with(s)) && is_all_caps(trimmed)
}

/// True when no cased character is lowercase. Characters without case
/// (digits, punctuation) are ignored.
pub fn is_all_caps(s: &str) -> bool {
    !s.chars().any(char::is_lowercase)
}

/// Character cue heuristic: an all-caps name right after a blank (or the
/// title page) with more text directly below it.
fn character_cue(lines: &[Line], index: usize) -> Option<LineKind> {
    if let Some(prev) = index.checked_sub(1).map(|p| &lines[p])
        && !(prev.kind == LineKind::Empty || prev.kind.is_title_page())
    {
        return None;
    }
    let next = lines.get(index + 1)?;
    if next.is_blank() {
        return None;
    }

    let trimmed = lines[index].trimmed();
    let name = strip_cue_decorations(trimmed);
    if name.is_empty() || !name.chars().any(char::is_alphabetic) || !is_all_caps(name) {
        return None;
    }

    Some(if trimmed.ends_with('^') {
        LineKind::DualDialogueCharacter
    } else {
        LineKind::Character
    })
}

/// Nearest earlier line whose kind isn't `Empty`.
fn previous_non_empty(lines: &[Line], index: usize) -> Option<&Line> {
    lines[..index]
        .iter()
        .rev()
        .find(|l| l.kind != LineKind::Empty)
}
