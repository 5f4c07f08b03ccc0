use relative_path::{RelativePath, RelativePathBuf};

/// File extensions treated as screenplays.
pub const SCRIPT_EXTENSIONS: &[&str] = &["fountain", "spmd", "txt"];

/// A screenplay file with a relative path and display-friendly name
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl ScriptFile {
    /// Create a new ScriptFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the display name (file name without its extension)
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_stem()
            .or_else(|| path.file_name())
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl From<&str> for ScriptFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
