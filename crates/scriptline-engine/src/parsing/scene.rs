use std::sync::LazyLock;

use regex::Regex;

use super::{
    inline::kinds::{Note, Paired},
    kind::LineKind,
    line::Line,
};

/// Color names accepted in a heading note.
pub const SCENE_COLORS: &[&str] = &[
    "red", "blue", "green", "pink", "magenta", "gray", "purple", "cyan", "teal", "yellow",
    "orange", "brown",
];

/// `#12A#` at the end of a heading.
static FORCED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([^#\s]+)#\s*$").expect("valid scene number pattern"));

/// Numbers headings and picks up their colors.
///
/// A forced `#…#` number is used as is; every other heading gets the next
/// value of a counter that forced numbers don't advance.
pub fn annotate_scenes(lines: &mut [Line]) {
    let mut counter = 0usize;
    for line in lines.iter_mut().filter(|l| l.kind == LineKind::Heading) {
        line.scene_number = Some(match forced_scene_number(&line.text) {
            Some(forced) => forced,
            None => {
                counter += 1;
                counter.to_string()
            }
        });
        line.color = scene_color(line);
    }
}

pub fn forced_scene_number(text: &str) -> Option<String> {
    FORCED_NUMBER
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// First note on the line naming a known color, either `[[COLOR red]]` or
/// plain `[[red]]`.
fn scene_color(line: &Line) -> Option<String> {
    line.formatting.note.iter().find_map(|sp| {
        let inner = line
            .text
            .get(sp.start + Note::OPEN.len()..sp.end - Note::CLOSE.len())?
            .trim()
            .to_lowercase();
        let name = inner.strip_prefix("color").map_or(inner.as_str(), str::trim);
        SCENE_COLORS
            .contains(&name)
            .then(|| name.to_string())
    })
}
