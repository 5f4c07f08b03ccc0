use super::Paired;

/// `[[note]]`, also used for scene colors (`[[COLOR RED]]`).
pub struct Note;

impl Paired for Note {
    const OPEN: &'static [u8] = b"[[";
    const CLOSE: &'static [u8] = b"]]";
}

/// `/* omitted */`
pub struct Omitted;

impl Paired for Omitted {
    const OPEN: &'static [u8] = b"/*";
    const CLOSE: &'static [u8] = b"*/";
}

/// `{{struck out}}`
pub struct Strikeout;

impl Paired for Strikeout {
    const OPEN: &'static [u8] = b"{{";
    const CLOSE: &'static [u8] = b"}}";
}
