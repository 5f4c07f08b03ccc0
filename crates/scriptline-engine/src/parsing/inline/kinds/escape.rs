/// A backslash that makes the following markup character literal.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Characters that carry meaning somewhere in the format.
    pub const ESCAPABLE: &'static [u8] = b"*_[]/{}\\^@#~=.>";

    pub fn escapes(b: u8) -> bool {
        Self::ESCAPABLE.contains(&b)
    }
}
