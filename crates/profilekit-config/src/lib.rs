//! ProfileKit configuration.
//!
//! TOML-based configuration for the profile host. Every section uses serde
//! defaults, so a partial file (or no file at all) works out of the box.
//!
//! ```rust,no_run
//! use profilekit_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config.page.url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LogLevel, ProfileKitConfig};

use profilekit_common::ConfigError;
use std::path::Path;

/// Load config from `path` if given, otherwise from the platform default
/// location (creating a documented default file on first run).
pub fn load_config(path: Option<&Path>) -> Result<ProfileKitConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string (`profilekit --print-config`).
pub fn config_to_json(config: &ProfileKitConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&ProfileKitConfig::default());
        assert!(json.contains("\"page\""));
        assert!(json.contains("\"webview\""));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn load_config_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");
        std::fs::write(&path, "[page]\nurl = \"https://profile.example.com/edit\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.page.url, "https://profile.example.com/edit");
    }

    #[test]
    fn load_config_with_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
