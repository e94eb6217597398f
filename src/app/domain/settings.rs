use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

/// Which key the comparator sees for each document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Compare by filename (last path segment) only.
    #[default]
    #[serde(rename = "alphabetical")]
    Alphabetical,

    /// Compare by the full path string.
    #[serde(rename = "fullPath")]
    FullPath,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Alphabetical => "alphabetical",
            SortOrder::FullPath => "fullPath",
        }
    }
}

/// Persisted user configuration. Field names on disk match the configuration
/// keys the host exposes to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortSettings {
    #[serde(rename = "sortEditorsAutomatically", default)]
    pub sort_automatically: bool,

    #[serde(rename = "sortEditorsOrder", default)]
    pub order: SortOrder,
}

impl SortSettings {
    /// Load settings from disk, or defaults if missing or unreadable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Config file path (cross-platform)
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("sort-editors");
        path.push("settings.json");
        path
    }
}
