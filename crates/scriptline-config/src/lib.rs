use scriptline_engine::DocumentSettings;
use scriptline_engine::settings::{DEFAULT_PAGE_SIZE, PAGE_SIZE, PRINT_SCENE_NUMBERS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User configuration, stored as TOML.
///
/// `page_size` and `print_scene_numbers` seed the settings of documents
/// that don't carry their own values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scripts_path: PathBuf,
    #[serde(default = "default_page_size")]
    pub page_size: String,
    #[serde(default = "default_print_scene_numbers")]
    pub print_scene_numbers: bool,
}

fn default_page_size() -> String {
    DEFAULT_PAGE_SIZE.to_string()
}

fn default_print_scene_numbers() -> bool {
    true
}

impl Config {
    pub fn new(scripts_path: impl Into<PathBuf>) -> Self {
        Self {
            scripts_path: scripts_path.into(),
            page_size: default_page_size(),
            print_scene_numbers: default_print_scene_numbers(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the scripts path
        config.scripts_path =
            Self::expand_path(&config.scripts_path).unwrap_or(config.scripts_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/scriptline");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Document settings holding the configured defaults.
    pub fn default_settings(&self) -> DocumentSettings {
        let mut settings = DocumentSettings::new();
        settings.set(PAGE_SIZE, self.page_size.clone());
        settings.set(PRINT_SCENE_NUMBERS, self.print_scene_numbers);
        settings
    }

    /// Fills keys missing from a loaded document with the configured defaults.
    pub fn apply_defaults(&self, settings: &mut DocumentSettings) {
        settings.fill_defaults(&self.default_settings());
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
