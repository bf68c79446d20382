//! Configuration types for the ZTP console

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub files: FileSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// ZTP service connection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the service
    #[serde(default = "default_server_url")]
    pub url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: default_server_url(),
        }
    }
}

/// Local file handling
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileSettings {
    /// Where downloads and CSV exports are written
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,

    /// Server-side folder that uploads land in
    #[serde(default)]
    pub upload_folder: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            download_dir: default_download_dir(),
            upload_folder: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Ask before quitting with unsaved profile edits
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}
