use std::collections::BTreeMap;

use serde::Serialize;

use crate::parsing::{
    inline::FormatCategory,
    kind::LineKind,
    line::Line,
};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub lines: Vec<LineSnap>,
}

#[derive(Debug, Serialize)]
pub struct LineSnap {
    pub kind: LineKind,
    pub offset: usize,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub formatting: BTreeMap<String, Vec<(usize, usize)>>,
}

pub fn normalize(lines: &[Line]) -> Snap {
    let lines = lines
        .iter()
        .map(|line| {
            let formatting = FormatCategory::ALL
                .iter()
                .filter(|c| !line.formatting.get(**c).is_empty())
                .map(|c| {
                    let spans = line
                        .formatting
                        .get(*c)
                        .iter()
                        .map(|sp| (sp.start, sp.end))
                        .collect();
                    (format!("{c:?}").to_lowercase(), spans)
                })
                .collect();

            LineSnap {
                kind: line.kind,
                offset: line.offset,
                text: line.text.clone(),
                scene: line.scene_number.clone(),
                formatting,
            }
        })
        .collect();

    Snap { lines }
}

impl Snap {
    /// One `kind | text` row per line, for compact inline snapshots.
    pub fn kind_table(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{:?} | {}", l.kind, l.text).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
