use serde::Serialize;

use super::{kind::LineKind, line::Line};

/// Keys accepted at the start of a title page, lowercased.
pub const TITLE_PAGE_KEYS: &[&str] = &[
    "title",
    "author",
    "authors",
    "credit",
    "source",
    "contact",
    "draft date",
    "date",
    "notes",
    "copyright",
];

/// One `Key: value` field of the title page with its continuation lines.
#[derive(Debug, Clone, Serialize)]
pub struct TitleEntry {
    pub key: String,
    pub lines: Vec<Line>,
}

/// The key/value header block at the top of a screenplay, in document order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TitlePage {
    entries: Vec<TitleEntry>,
}

impl TitlePage {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TitleEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Lines composing the field stored under `key` (lowercase).
    pub fn get(&self, key: &str) -> Option<&[Line]> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.lines.as_slice())
    }

    /// The field's text: the key line's value followed by trimmed
    /// continuation lines, joined with `\n`. Empty parts are skipped.
    pub fn value(&self, key: &str) -> Option<String> {
        let lines = self.get(key)?;
        let parts: Vec<&str> = lines
            .iter()
            .map(|l| match title_key(&l.text) {
                Some(_) => l.text.split_once(':').map_or("", |(_, v)| v.trim()),
                None => l.text.trim(),
            })
            .filter(|p| !p.is_empty())
            .collect();
        Some(parts.join("\n"))
    }

    /// Collects entries from lines stamped by [`parse_title_page`].
    pub fn from_lines(lines: &[Line]) -> Self {
        let mut page = Self::default();
        for line in lines {
            if let Some(key) = &line.title_page_key {
                page.push(key, line.clone());
            }
        }
        page
    }

    fn push(&mut self, key: &str, line: Line) {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.lines.push(line),
            None => self.entries.push(TitleEntry {
                key: key.to_string(),
                lines: vec![line],
            }),
        }
    }
}

/// Returns the lowercased key if `text` is a title page key line.
///
/// A key line has no leading whitespace and a whitelisted key before a
/// colon that isn't the first character.
pub fn title_key(text: &str) -> Option<String> {
    if is_indented(text) {
        return None;
    }
    let colon = text.find(':')?;
    if colon == 0 {
        return None;
    }
    let key = text[..colon].trim().to_lowercase();
    TITLE_PAGE_KEYS.contains(&key.as_str()).then_some(key)
}

fn is_indented(text: &str) -> bool {
    text.starts_with([' ', '\t'])
}

/// Recognises the title page at the start of `lines`.
///
/// Consumed lines are stamped with their title page kind and key (absorbed
/// blank lines with `Empty` and no key). Returns the number of leading lines
/// consumed; classification resumes at that index.
pub fn parse_title_page(lines: &mut [Line]) -> usize {
    let Some(first) = lines.first() else {
        return 0;
    };
    if title_key(&first.text).is_none() {
        return 0;
    }

    let mut current: Option<(String, LineKind)> = None;
    let mut i = 0;

    while i < lines.len() {
        let text = &lines[i].text;

        if text.trim().is_empty() {
            let next = lines[i + 1..]
                .iter()
                .position(|l| !l.is_blank())
                .map(|p| p + i + 1);
            let continues = next.is_some_and(|n| {
                title_key(&lines[n].text).is_some()
                    || (current.is_some() && is_indented(&lines[n].text))
            });
            match next {
                Some(n) if continues => {
                    for blank in &mut lines[i..n] {
                        blank.kind = LineKind::Empty;
                    }
                    i = n;
                    continue;
                }
                _ => break,
            }
        }

        if let Some(key) = title_key(text) {
            let kind = LineKind::for_title_key(&key).unwrap_or(LineKind::TitlePageUnknown);
            current = Some((key, kind));
        } else if !is_indented(text) || current.is_none() {
            break;
        }

        if let Some((key, kind)) = &current {
            let line = &mut lines[i];
            line.kind = *kind;
            line.title_page_key = Some(key.clone());
        }
        i += 1;
    }

    i
}
