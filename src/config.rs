//! Startup configuration read from config.json in the app config directory.
//! The file is only ever read; nothing is written back between sessions.

use crate::constants::APP_NAME;
use crate::converter::template::Template;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // Downloads
    pub download_dir: Option<String>,
    pub ask_save_location: bool,

    // Window
    pub window_width: f32,
    pub window_height: f32,

    // Widget labels
    pub template: Template,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            download_dir: None,
            ask_save_location: false,
            window_width: 560.0,
            window_height: 300.0,
            template: Template::default(),
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_dir().join("config.json"))
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(config) => {
                    debug!(path = %path.display(), "Config loaded");
                    config
                }
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn download_dir_or_default(&self) -> PathBuf {
        self.download_dir
            .as_ref()
            .map(PathBuf::from)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
