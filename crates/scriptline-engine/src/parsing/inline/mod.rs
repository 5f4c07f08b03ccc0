//! # Inline Formatting
//!
//! Cursor-based extraction of emphasis, notes and omitted text.
//!
//! ## Architecture
//!
//! Extraction runs once per line after its kind is known and never looks
//! at neighbouring lines. Each category is scanned on its own: find the next
//! opener, find the next closer after it, record the span (delimiters
//! included), continue after the closer. An opener with no closer ends the
//! scan for that category.
//!
//! ## Modules
//!
//! - **`types`**: `Formatting` (span lists per category), `FormatCategory`
//! - **`kinds`**: delimiter-owning types (`Bold`, `Italic`, `Note`, ...)
//! - **`cursor`**: `Cursor` for byte-position scanning
//! - **`parser`**: `extract_formatting()` entry point
//!
//! ## Italic vs Bold
//!
//! A `*` touching another `*` belongs to a bold delimiter and is never an
//! italic opener or closer.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::extract_formatting;
pub use types::{FormatCategory, Formatting};
