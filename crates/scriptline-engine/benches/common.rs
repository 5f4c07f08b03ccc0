// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_screenplay(scenes: usize) -> String {
    let mut content = String::from("Title: Benchmark\nAuthor: Generated\nDraft date: today\n\n");

    for scene in 0..scenes {
        content.push_str(&format!("INT. LOCATION {scene} - DAY\n\n"));
        content.push_str("The room is **quiet**. A _single_ lamp burns. [[note to self]]\n\n");
        content.push_str("JOHN\n(quietly)\nWe shouldn't be *here*.\n\n");
        content.push_str("MARY ^\nThen leave.\n\n");
        if scene % 5 == 4 {
            content.push_str("CUT TO:\n\n");
        }
    }

    content
}

#[allow(dead_code)]
pub fn generate_formatted_line(pairs: usize) -> String {
    "**bold** *italic* _under_ [[note]] /* omit */ {{strike}} \\* ".repeat(pairs)
}
