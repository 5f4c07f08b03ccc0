use super::Paired;

/// `**bold**`
pub struct Bold;

impl Paired for Bold {
    const OPEN: &'static [u8] = b"**";
    const CLOSE: &'static [u8] = b"**";
}

/// `_underline_`
pub struct Underline;

impl Paired for Underline {
    const OPEN: &'static [u8] = b"_";
    const CLOSE: &'static [u8] = b"_";
}

/// `*italic*`. Not [`Paired`]: a star only counts when it stands alone.
pub struct Italic;

impl Italic {
    pub const STAR: u8 = b'*';
}
