//! # Document Settings
//!
//! Editor state travels with a screenplay as a JSON object appended to the
//! end of the file inside a comment-like wrapper:
//!
//! ```text
//! ...last line of the script
//!
//! /* If you're seeing this, you can remove the following stuff - BEAT:
//! {"caretPosition":120,"pageSize":"A4"}
//! END_BEAT */
//! ```
//!
//! [`split_settings`] separates that trailer from the script body on load
//! and [`DocumentSettings::append_to`] writes it back on save. Keys the
//! engine doesn't know about are kept as-is and in order.

use serde_json::{Map, Value};

/// Marker written before the JSON block.
pub const START_MARKER: &str = "/* If you're seeing this, you can remove the following stuff - BEAT:";
/// Shorter marker accepted when reading older files.
pub const ALT_START_MARKER: &str = "/* BEAT:";
pub const END_MARKER: &str = "END_BEAT */";

pub const CARET_POSITION: &str = "caretPosition";
pub const PAGE_SIZE: &str = "pageSize";
pub const PRINT_SCENE_NUMBERS: &str = "printSceneNumbers";
pub const LOCKED: &str = "Locked";

pub const DEFAULT_PAGE_SIZE: &str = "A4";

/// Per-document key/value settings backed by an ordered JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSettings {
    values: Map<String, Value>,
}

impl DocumentSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn caret_position(&self) -> usize {
        self.get(CARET_POSITION)
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0)
    }

    pub fn set_caret_position(&mut self, position: usize) {
        self.set(CARET_POSITION, position);
    }

    pub fn page_size(&self) -> &str {
        self.get(PAGE_SIZE)
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn print_scene_numbers(&self) -> bool {
        self.get(PRINT_SCENE_NUMBERS)
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    pub fn locked(&self) -> bool {
        self.get(LOCKED).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Copies every key of `other` that isn't already set here.
    pub fn fill_defaults(&mut self, other: &DocumentSettings) {
        for (key, value) in &other.values {
            if !self.values.contains_key(key) {
                self.values.insert(key.clone(), value.clone());
            }
        }
    }

    /// The trailer block for this map, empty when there is nothing to save.
    pub fn to_trailer(&self) -> String {
        if self.values.is_empty() {
            return String::new();
        }
        let json = Value::Object(self.values.clone()).to_string();
        format!("\n\n{START_MARKER}\n{json}\n{END_MARKER}")
    }

    /// `body` followed by the encoded trailer.
    pub fn append_to(&self, body: &str) -> String {
        let mut out = String::with_capacity(body.len() + 64);
        out.push_str(body);
        out.push_str(&self.to_trailer());
        out
    }
}

impl From<Map<String, Value>> for DocumentSettings {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

/// Splits raw file content into the script body and its settings.
///
/// The last start marker (either form) opens the trailer; the body is
/// everything before it, less the one blank-line separator that
/// [`DocumentSettings::to_trailer`] writes. A trailer without an end marker
/// is dropped, and a trailer whose content isn't a JSON object yields empty
/// settings. Neither case is an error.
pub fn split_settings(raw: &str) -> (&str, DocumentSettings) {
    let start = [START_MARKER, ALT_START_MARKER]
        .iter()
        .filter_map(|marker| raw.rfind(marker).map(|pos| (pos, marker.len())))
        .max_by_key(|(pos, _)| *pos);

    let Some((start, marker_len)) = start else {
        return (raw, DocumentSettings::default());
    };
    let before = &raw[..start];
    let body = before.strip_suffix("\n\n").unwrap_or(before);
    let content_start = start + marker_len;

    let Some(end) = raw[content_start..].find(END_MARKER) else {
        log::warn!("settings block at byte {start} has no end marker; dropping it");
        return (body, DocumentSettings::default());
    };
    let json = raw[content_start..content_start + end].trim();

    let settings = match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(values)) => DocumentSettings::from(values),
        Ok(other) => {
            log::warn!("settings block is not a JSON object: {other}");
            DocumentSettings::default()
        }
        Err(e) => {
            log::warn!("ignoring malformed settings block: {e}");
            DocumentSettings::default()
        }
    };
    (body, settings)
}
