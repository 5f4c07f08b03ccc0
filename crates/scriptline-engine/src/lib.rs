pub mod document;
pub mod io;
pub mod models;
pub mod parsing;
pub mod settings;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{Screenplay, completion};
pub use io::*;
pub use models::script_file::*;
pub use parsing::{
    Formatting, Line, LineId, LineKind, ParsedDoc, Span, TitlePage, parse_document,
};
pub use settings::DocumentSettings;
