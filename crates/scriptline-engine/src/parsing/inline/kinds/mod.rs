//! # Inline Kinds
//!
//! Each formatting category owns its delimiter constants. The extractor in
//! `parser` never hardcodes `**` or `[[`; it asks these types.
//!
//! ## Types
//!
//! - **`Bold`**, **`Underline`**: emphasis pairs (`**`, `_`)
//! - **`Italic`**: single `*`, rejected when touching another `*`
//! - **`Note`**, **`Omitted`**, **`Strikeout`**: bracketed pairs
//! - **`Escape`**: backslash before a markup character

pub mod emphasis;
pub mod escape;
pub mod note;

pub use emphasis::{Bold, Italic, Underline};
pub use escape::Escape;
pub use note::{Note, Omitted, Strikeout};

/// A formatting category delimited by an opening and a closing marker.
pub trait Paired {
    const OPEN: &'static [u8];
    const CLOSE: &'static [u8];
}
