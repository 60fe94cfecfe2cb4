//! Configuration for rowstore

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base directory record files live under
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Extension appended to the last key segment
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// File size in bytes above which reads stream instead of loading whole
    #[serde(default = "default_large_file_limit")]
    pub large_file_limit: u64,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(crate::DEFAULT_BASE_DIR)
}

fn default_file_extension() -> String {
    crate::DEFAULT_FILE_EXTENSION.to_string()
}

fn default_large_file_limit() -> u64 {
    crate::DEFAULT_LARGE_FILE_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            file_extension: default_file_extension(),
            large_file_limit: default_large_file_limit(),
        }
    }
}

impl Config {
    /// Load config from an explicit file, or fall back through the default
    /// locations, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(config_path)
                .context(format!("Failed to load config from {}", config_path.display()));
        }

        // Try default locations
        let default_paths = [
            Some(PathBuf::from("rowstore.yml")),
            dirs::config_dir().map(|p| p.join("rowstore").join("config.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_from_file(path)
                    .context(format!("Failed to load config from {}", path.display()));
            }
        }

        Ok(Config::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
