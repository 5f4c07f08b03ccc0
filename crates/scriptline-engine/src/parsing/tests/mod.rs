//! Whole-pipeline tests for the parsing module.
//!
//! Fixtures (.fountain) live in `fixtures/`; every fixture is also run
//! through the invariant checks and a reparse.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Line, LineKind, ParsedDoc, Span, parse_document,
    snapshot::{invariants, normalize},
};

fn fixture(name: &str) -> String {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.fountain",
        env!("CARGO_MANIFEST_DIR")
    );
    std::fs::read_to_string(path).unwrap()
}

fn kinds(doc: &ParsedDoc) -> Vec<LineKind> {
    doc.lines.iter().map(|l| l.kind).collect()
}

fn find<'a>(doc: &'a ParsedDoc, text: &str) -> &'a Line {
    doc.lines
        .iter()
        .find(|l| l.text == text)
        .unwrap_or_else(|| panic!("no line {text:?}"))
}

fn rejoin(doc: &ParsedDoc) -> String {
    doc.lines
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

// Fixtures

#[rstest]
#[case("brick_and_steel")]
#[case("no_title_page")]
fn fixture_holds_invariants_and_reparses(#[case] name: &str) {
    let text = fixture(name);
    let doc = parse_document(&text);
    invariants(&text, &doc.lines);

    let rejoined = rejoin(&doc);
    assert_eq!(rejoined, text);
    assert_eq!(kinds(&parse_document(&rejoined)), kinds(&doc));
}

#[test]
fn brick_and_steel_title_page() {
    let doc = parse_document(&fixture("brick_and_steel"));

    assert_eq!(
        doc.title_page.keys().collect::<Vec<_>>(),
        vec!["title", "credit", "author", "source", "draft date", "contact"]
    );
    assert_eq!(
        doc.title_page.value("title").as_deref(),
        Some("_**BRICK & STEEL**_\n_**FULL RETIRED**_")
    );
    assert_eq!(
        doc.title_page.value("contact").as_deref(),
        Some("Next Level Productions\n1588 Mission Dr.\nSolvang, CA 93463")
    );
    assert_eq!(doc.title_page.get("title").map(<[Line]>::len), Some(3));
    assert!(
        doc.title_page
            .get("title")
            .unwrap()
            .iter()
            .all(|l| l.kind == LineKind::TitlePageTitle)
    );
    assert_eq!(
        find(&doc, "Source: Story by KTM").kind,
        LineKind::TitlePageSource
    );
    assert_eq!(
        find(&doc, "Draft date: 1/20/2012").kind,
        LineKind::TitlePageDraftDate
    );
}

#[test]
fn brick_and_steel_title_page_keeps_formatting() {
    let doc = parse_document(&fixture("brick_and_steel"));
    let title = doc.title_page.get("title").unwrap();

    assert_eq!(title[1].formatting.bold, vec![Span::new(5, 22)]);
    assert_eq!(title[1].formatting.underline, vec![Span::new(4, 23)]);
}

#[test]
fn brick_and_steel_body() {
    let doc = parse_document(&fixture("brick_and_steel"));

    let heading = find(&doc, "EXT. BRICK'S PATIO - DAY");
    assert_eq!(heading.kind, LineKind::Heading);
    assert_eq!(heading.scene_number.as_deref(), Some("1"));

    let forced = find(&doc, ".SNIPER SCOPE POV");
    assert_eq!(forced.kind, LineKind::Heading);
    assert_eq!(forced.scene_number.as_deref(), Some("2"));

    let numbered = find(&doc, "INT. TRAILER HOME - DAY #1A#");
    assert_eq!(numbered.scene_number.as_deref(), Some("1A"));

    assert_eq!(find(&doc, "STEEL").kind, LineKind::Character);
    assert_eq!(find(&doc, "Beer's ready!").kind, LineKind::Dialogue);
    assert_eq!(find(&doc, "(beer raised)").kind, LineKind::Parenthetical);
    assert_eq!(find(&doc, "To retirement.").kind, LineKind::Dialogue);
    assert_eq!(find(&doc, "SMASH CUT TO:").kind, LineKind::Transition);
    assert_eq!(find(&doc, "JIM ^").kind, LineKind::DualDialogueCharacter);
    assert_eq!(
        find(&doc, r"Retire them. \*Permanently\*.").kind,
        LineKind::DualDialogue
    );
    assert_eq!(find(&doc, "> THE END <").kind, LineKind::Centered);
    assert_eq!(
        find(&doc, "This is the home of THE BOY BAND, AKA DAN and JIM.").kind,
        LineKind::Action
    );
}

#[test]
fn brick_and_steel_formatting() {
    let doc = parse_document(&fixture("brick_and_steel"));

    let drink = find(&doc, "They drink *long* and _well_ from the beers.");
    assert_eq!(drink.formatting.italic, vec![Span::new(11, 17)]);
    assert_eq!(drink.formatting.underline, vec![Span::new(22, 28)]);

    let note = find(&doc, "[[This is a note about the scene.]]");
    assert_eq!(note.formatting.note, vec![Span::new(0, note.text.len())]);

    let omitted = find(&doc, "/* An omitted line. */");
    assert_eq!(
        omitted.formatting.omitted,
        vec![Span::new(0, omitted.text.len())]
    );

    let escaped = find(&doc, r"Retire them. \*Permanently\*.");
    assert_eq!(
        escaped.formatting.escape,
        vec![Span::new(13, 15), Span::new(26, 28)]
    );
}

#[test]
fn title_like_text_later_in_body_is_action() {
    let doc = parse_document(&fixture("no_title_page"));
    assert!(doc.title_page.is_empty());
    assert_eq!(
        find(&doc, "She enters. Title: not a title page.").kind,
        LineKind::Action
    );
    assert_eq!(find(&doc, "JANE").kind, LineKind::Character);
    assert_eq!(find(&doc, "Hi.").kind, LineKind::Dialogue);
}

// Documented examples

#[rstest]
#[case("INT. HOUSE - DAY", LineKind::Heading)]
#[case(".FLASHBACK", LineKind::Heading)]
#[case("CUT TO:", LineKind::Transition)]
#[case(">FADE TO BLACK", LineKind::Transition)]
#[case(">THE END<", LineKind::Centered)]
#[case("~Happy birthday to you", LineKind::Lyrics)]
#[case("===", LineKind::PageBreak)]
#[case("# Act One", LineKind::Section)]
#[case("= synopsis text", LineKind::Synopsis)]
fn single_line_documents(#[case] text: &str, #[case] expected: LineKind) {
    let doc = parse_document(text);
    assert_eq!(kinds(&doc), vec![expected]);
}

#[test]
fn cue_and_dialogue_between_blanks() {
    let doc = parse_document("\nJOHN\nHello, world!\n");
    assert_eq!(
        kinds(&doc),
        vec![
            LineKind::Empty,
            LineKind::Character,
            LineKind::Dialogue,
            LineKind::Empty
        ]
    );
}

#[test]
fn cue_parenthetical_dialogue() {
    let doc = parse_document("JOHN\n(whispering)\nHello, world!");
    assert_eq!(
        kinds(&doc),
        vec![
            LineKind::Character,
            LineKind::Parenthetical,
            LineKind::Dialogue
        ]
    );
}

#[test]
fn title_page_then_body() {
    let doc = parse_document("Title: My Screenplay\nAuthor: John Doe\n\nFADE IN:");
    assert_eq!(
        kinds(&doc),
        vec![
            LineKind::TitlePageTitle,
            LineKind::TitlePageAuthor,
            LineKind::Empty,
            LineKind::Action
        ]
    );
    assert_eq!(
        doc.title_page.value("title").as_deref(),
        Some("My Screenplay")
    );
    assert_eq!(doc.title_page.value("author").as_deref(), Some("John Doe"));
    assert_eq!(
        doc.title_page.get("title").unwrap()[0].text,
        "Title: My Screenplay"
    );
}

#[rstest]
#[case("\nJOHN (V.O.)\nHi.", "JOHN", LineKind::Character)]
#[case("\nJANE ^\nHi.", "JANE", LineKind::DualDialogueCharacter)]
#[case("\n@McCloud\nHi.", "MCCLOUD", LineKind::Character)]
#[case("\n@McCloud ^\nHi.", "MCCLOUD", LineKind::DualDialogueCharacter)]
fn character_names(#[case] text: &str, #[case] name: &str, #[case] kind: LineKind) {
    let doc = parse_document(text);
    assert_eq!(doc.lines[1].kind, kind);
    assert_eq!(doc.lines[1].character_name().as_deref(), Some(name));
}

#[test]
fn bold_and_italic_on_one_line() {
    let doc = parse_document("This is **bold** text.");
    assert_eq!(doc.lines[0].formatting.bold, vec![Span::new(8, 16)]);
    assert!(doc.lines[0].formatting.italic.is_empty());

    let doc = parse_document("This is *italic* text.");
    assert_eq!(doc.lines[0].formatting.italic, vec![Span::new(8, 16)]);
    assert!(doc.lines[0].formatting.bold.is_empty());

    let doc = parse_document("**bold** then a * alone");
    assert_eq!(doc.lines[0].formatting.bold, vec![Span::new(0, 8)]);
    assert!(doc.lines[0].formatting.italic.is_empty());
}

// Totality and reparse

#[rstest]
#[case("")]
#[case("\n")]
#[case("\n\n\n")]
#[case("   \t  ")]
#[case("(")]
#[case(")")]
#[case("@")]
#[case("^")]
#[case(".")]
#[case("..")]
#[case("=")]
#[case("==")]
#[case(">")]
#[case("<")]
#[case("~")]
#[case("#")]
#[case("Title:")]
#[case(":")]
#[case("**")]
#[case("***")]
#[case("/*/")]
#[case("[[[]]]")]
#[case("\\")]
#[case("ÉLODIE\nBonjour à tous.\n")]
#[case("日本語のテキスト\n\n台詞")]
#[case("Title: x\n\n\n    indented\n\nAuthor: y")]
#[case("\r\nJOHN\r\nHi.\r\n")]
fn parsing_is_total(#[case] text: &str) {
    let doc = parse_document(text);
    invariants(text, &doc.lines);
    assert_eq!(rejoin(&doc), text);
    assert_eq!(kinds(&parse_document(&rejoin(&doc))), kinds(&doc));
}

#[test]
fn empty_text_is_single_empty_line() {
    let doc = parse_document("");
    assert_eq!(doc.lines.len(), 1);
    assert_eq!(doc.lines[0].kind, LineKind::Empty);
    assert_eq!(doc.lines[0].offset, 0);
    assert!(doc.title_page.is_empty());
}

#[test]
fn reparse_produces_fresh_line_ids() {
    let text = "INT. HOUSE - DAY\n\nJOHN\nHi.";
    let first = parse_document(text);
    let second = parse_document(text);
    assert_eq!(kinds(&first), kinds(&second));
    assert!(
        first
            .lines
            .iter()
            .zip(&second.lines)
            .all(|(a, b)| a.id != b.id)
    );
}

#[test]
fn offsets_are_utf8_bytes() {
    let doc = parse_document("Über\n**naïve**");
    assert_eq!(doc.lines[1].offset, "Über".len() + 1);
    assert_eq!(doc.lines[1].formatting.bold, vec![Span::new(0, 10)]);
}

#[test]
fn normalize_drops_empty_formatting() {
    let doc = parse_document("Plain\n**Bold**");
    let snap = normalize(&doc.lines);
    assert!(snap.lines[0].formatting.is_empty());
    assert_eq!(snap.lines[1].formatting.get("bold"), Some(&vec![(0, 8)]));
    assert_eq!(snap.kind_table(), "Action | Plain\nAction | **Bold**");
}
