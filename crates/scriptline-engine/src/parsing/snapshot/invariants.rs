use crate::parsing::{inline::FormatCategory, line::Line};

/// Panics if `lines` violates the line model invariants for `text`.
pub fn check(text: &str, lines: &[Line]) {
    assert!(!lines.is_empty(), "a parse always yields at least one line");

    let mut expected_offset = 0usize;
    for line in lines {
        assert_eq!(
            line.offset, expected_offset,
            "line offset drifted at {:?}",
            line.text
        );
        assert_eq!(
            text.get(line.offset..line.end_offset()),
            Some(line.text.as_str()),
            "line text does not match document at offset {}",
            line.offset
        );
        assert!(
            !line.kind.is_export_only(),
            "export-only kind {:?} materialized",
            line.kind
        );

        for category in FormatCategory::ALL {
            let spans = line.formatting.get(category);
            for sp in spans {
                assert!(
                    sp.start <= sp.end && sp.end <= line.text.len(),
                    "{category:?} span {sp:?} out of bounds for {:?}",
                    line.text
                );
            }
            for pair in spans.windows(2) {
                assert!(
                    pair[0].end <= pair[1].start,
                    "{category:?} spans overlap or are unordered: {:?}",
                    pair
                );
            }
        }

        expected_offset = line.end_offset() + 1;
    }
    assert_eq!(expected_offset, text.len() + 1, "lines do not cover the text");
}
