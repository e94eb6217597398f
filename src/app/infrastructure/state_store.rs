use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::AppError;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    last_seen_version: String,
}

/// Single-value store for the release-notes version last shown to the user,
/// kept as a small JSON file under the platform data directory.
pub struct VersionStore {
    path: PathBuf,
    state: PersistedState,
}

impl VersionStore {
    /// Open the store at the default location.
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: PathBuf) -> Self {
        let state = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(state) => state,
                Err(e) => {
                    eprintln!("Failed to parse state file: {}. Starting fresh.", e);
                    PersistedState::default()
                }
            },
            Err(_) => PersistedState::default(),
        };
        Self { path, state }
    }

    /// State file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("sort-editors");
        path.push("state.json");
        path
    }

    /// Empty string when no version was ever recorded.
    pub fn last_seen_version(&self) -> &str {
        &self.state.last_seen_version
    }

    pub fn set_last_seen_version(&mut self, version: &str) -> Result<(), AppError> {
        self.state.last_seen_version = version.to_string();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
