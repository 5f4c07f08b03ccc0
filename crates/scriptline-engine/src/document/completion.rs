//! Autocomplete sources for editors.
//!
//! Suggestions are computed from the current parse; rendering them is up to
//! the host.

use std::collections::HashMap;

use super::Screenplay;
use crate::parsing::classify::{SCENE_HEADING_PREFIXES, scene_prefix};

pub const TIMES_OF_DAY: &[&str] = &[
    "DAY",
    "NIGHT",
    "MORNING",
    "AFTERNOON",
    "EVENING",
    "DAWN",
    "DUSK",
    "CONTINUOUS",
    "LATER",
    "MOMENTS LATER",
    "SAME",
];

impl Screenplay {
    /// Character names starting with `prefix` (case-insensitive), most
    /// frequent cue first. Ties keep the order of first appearance.
    pub fn character_suggestions(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.trim().to_uppercase();
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

        for (order, name) in self.character_cues().filter_map(|l| l.character_name()).enumerate() {
            counts.entry(name).or_insert((0, order)).0 += 1;
        }

        let mut ranked: Vec<(String, (usize, usize))> = counts
            .into_iter()
            .filter(|(name, _)| name.starts_with(&prefix))
            .collect();
        ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_b.cmp(count_a).then(first_a.cmp(first_b))
        });
        ranked.into_iter().map(|(name, _)| name).collect()
    }

    /// Heading completions for what the user has typed so far.
    ///
    /// Suggests every standard prefix (dotted and space forms) that starts
    /// with the input, then, once the input carries a prefix, locations from
    /// earlier headings that start with the rest of the input.
    pub fn scene_heading_suggestions(&self, input: &str) -> Vec<String> {
        let upper = input.trim_start().to_uppercase();
        let mut out: Vec<String> = SCENE_HEADING_PREFIXES
            .iter()
            .filter(|p| p.starts_with(&upper))
            .map(|p| p.to_string())
            .collect();

        if let Some(prefix) = scene_prefix(&upper) {
            let typed = upper[prefix.len()..].trim_start();
            for location in self.locations() {
                if location.to_uppercase().starts_with(typed) && !out.contains(&location) {
                    out.push(location);
                }
            }
        }
        out
    }

    /// Distinct heading locations in order of first use, with the scene
    /// prefix and a trailing ` - TIME` removed.
    pub fn locations(&self) -> Vec<String> {
        let mut seen: Vec<String> = vec![];
        for heading in self.scene_headings() {
            let text = heading.trimmed();
            let Some(location) = scene_prefix(text).and_then(|p| text.get(p.len()..)) else {
                continue;
            };
            let location = location
                .rsplit_once(" - ")
                .map_or(location, |(place, _time)| place)
                .trim();
            if !location.is_empty() && !seen.iter().any(|s| s == location) {
                seen.push(location.to_string());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCRIPT: &str = "\
INT. DINER - NIGHT

MARY
One.

JOHN
Two.

JOHN
Three.

MARTHA
Four.

EXT. DINER PARKING LOT - NIGHT

INT. DINER - LATER

EXT. BEACH";

    #[test]
    fn character_suggestions_rank_by_frequency() {
        let script = Screenplay::parse(SCRIPT);
        assert_eq!(
            script.character_suggestions(""),
            vec!["JOHN", "MARY", "MARTHA"]
        );
        assert_eq!(script.character_suggestions("ma"), vec!["MARY", "MARTHA"]);
        assert!(script.character_suggestions("Z").is_empty());
    }

    #[test]
    fn locations_strip_prefix_and_time() {
        let script = Screenplay::parse(SCRIPT);
        assert_eq!(
            script.locations(),
            vec!["DINER", "DINER PARKING LOT", "BEACH"]
        );
    }

    #[test]
    fn prefix_suggestions_before_a_prefix_is_typed() {
        let script = Screenplay::parse(SCRIPT);
        assert_eq!(
            script.scene_heading_suggestions("in"),
            vec!["INT.", "INT/EXT.", "INT ", "INT/EXT "]
        );
        assert_eq!(script.scene_heading_suggestions("E/"), vec!["E/I.", "E/I "]);
    }

    #[test]
    fn exact_prefix_is_still_suggested() {
        let script = Screenplay::parse(SCRIPT);
        assert_eq!(
            script.scene_heading_suggestions("ext"),
            vec!["EXT.", "EXT/INT.", "EXT ", "EXT/INT "]
        );
        assert_eq!(
            script.scene_heading_suggestions("I/E."),
            vec!["I/E.", "DINER", "DINER PARKING LOT", "BEACH"]
        );
    }

    #[test]
    fn location_suggestions_after_prefix() {
        let script = Screenplay::parse(SCRIPT);
        assert_eq!(
            script.scene_heading_suggestions("EXT. din"),
            vec!["DINER", "DINER PARKING LOT"]
        );
        assert_eq!(
            script.scene_heading_suggestions("int. "),
            vec!["DINER", "DINER PARKING LOT", "BEACH"]
        );
    }

    #[test]
    fn times_of_day_are_static() {
        assert!(TIMES_OF_DAY.contains(&"DAY"));
        assert!(TIMES_OF_DAY.contains(&"NIGHT"));
    }
}
