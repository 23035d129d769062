//! Runtime settings, read from `hurema.toml` when it exists.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "hurema.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file holding `accounts` and `account_certifications`.
    pub database_path: PathBuf,
    /// Directory backing the drive storage.
    pub drive_dir: PathBuf,
    /// Viewer link for drive files not stored locally; `{id}` is replaced.
    pub drive_link_template: String,
    pub open_browser: bool,
    /// Upper bound for spreadsheet and attachment uploads.
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("hurema.sqlite"),
            drive_dir: PathBuf::from("drive"),
            drive_link_template: "https://drive.google.com/file/d/{id}/view".to_string(),
            open_browser: true,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Loads `path` if present, defaults otherwise. A file that exists but does
    /// not parse is an error.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        Self::from_toml(&raw).map_err(|e| format!("invalid {}: {}", path.display(), e))
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = AppConfig::from_toml("port = 9090\nopen_browser = false\n").unwrap();
        assert_eq!(config.port, 9090);
        assert!(!config.open_browser);
        assert_eq!(config.database_path, PathBuf::from("hurema.sqlite"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "port = \"not a number\"").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }
}
