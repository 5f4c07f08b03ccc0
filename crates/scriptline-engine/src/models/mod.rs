pub mod script_file;

pub use script_file::{SCRIPT_EXTENSIONS, ScriptFile};
