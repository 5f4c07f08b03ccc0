use crate::document::Screenplay;
use crate::models::{SCRIPT_EXTENSIONS, ScriptFile};
use crate::settings::{DocumentSettings, split_settings};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid scripts directory: {0}")]
    InvalidScriptsDir(String),
}

/// Read a screenplay file and return its raw content
pub fn read_script(relative_path: &RelativePath, scripts_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(scripts_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write raw content to a screenplay file
pub fn write_script(
    relative_path: &RelativePath,
    scripts_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(scripts_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Load a screenplay: normalise line endings, split off the settings
/// trailer and parse the body.
pub fn load_script(
    relative_path: &RelativePath,
    scripts_root: &Path,
) -> Result<(Screenplay, DocumentSettings), IoError> {
    let raw = read_script(relative_path, scripts_root)?;
    let raw = normalize_line_endings(&raw);
    let (body, settings) = split_settings(&raw);
    log::debug!(
        "loaded {relative_path} ({} bytes body, {} settings)",
        body.len(),
        settings.len()
    );
    Ok((Screenplay::parse(body), settings))
}

/// Save a screenplay body with its settings trailer.
pub fn save_script(
    relative_path: &RelativePath,
    scripts_root: &Path,
    script: &Screenplay,
    settings: &DocumentSettings,
) -> Result<(), IoError> {
    let content = settings.append_to(&script.text());
    write_script(relative_path, scripts_root, &content)
}

/// `\r\n` and lone `\r` become `\n`; the parser splits on `\n` only.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Scan for screenplay files in the scripts directory
pub fn scan_script_files(scripts_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_scripts_dir(scripts_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(scripts_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Screenplay files under the root as [`ScriptFile`]s, sorted by path.
pub fn list_scripts(scripts_root: &Path) -> Result<Vec<ScriptFile>, IoError> {
    let files = scan_script_files(scripts_root)?;
    Ok(files
        .iter()
        .filter_map(|path| path.strip_prefix(scripts_root).ok())
        .filter_map(|rel| RelativePathBuf::from_path(rel).ok())
        .map(ScriptFile::new)
        .collect())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension().and_then(|e| e.to_str())
            && SCRIPT_EXTENSIONS.contains(&ext)
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_scripts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidScriptsDir(format!(
            "scripts directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}
