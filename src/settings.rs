//! User settings for the board shell
//!
//! Stored as JSON next to the board file. Missing or unreadable settings
//! fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Shell preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board text file loaded at startup
    pub board_file: PathBuf,
    /// Write the board back to `board_file` when the shell exits
    pub save_on_exit: bool,
    /// Printed in front of spoken text
    pub speak_prefix: String,
    /// List the images of a category right after opening it
    pub show_locations_on_enter: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_file: PathBuf::from("aac-board.txt"),
            save_on_exit: true,
            speak_prefix: "> ".to_string(),
            show_locations_on_enter: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`
    pub fn load(path: &Path) -> Self {
        if let Ok(json) = fs::read_to_string(path) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(err) => log::warn!("Ignoring invalid settings in {}: {}", path.display(), err),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from `path`, first writing the defaults there if the
    /// file does not exist yet
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::load(path);
        }
        let settings = Self::default();
        settings.save(path);
        settings
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved"),
                Err(err) => log::warn!("Could not save settings to {}: {}", path.display(), err),
            }
        }
    }
}
