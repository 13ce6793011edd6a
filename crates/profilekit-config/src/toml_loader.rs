//! TOML config file loading and creation.

use crate::schema::ProfileKitConfig;
use crate::validation;
use profilekit_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};


/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. If the parsed config fails
/// validation, a warning is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<ProfileKitConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: ProfileKitConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(ProfileKitConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/profilekit/config.toml`
/// On Linux: `~/.config/profilekit/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<ProfileKitConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(ProfileKitConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("profilekit").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
fn default_config_toml() -> &'static str {
    r##"# ProfileKit Configuration
# Only override what you want to change -- missing fields use defaults.

[page]
# url = "about:blank"

[webview]
# inspectable = false    # defaults to true in debug builds
# transparent = false
# user_agent = "ProfileKit/0.1"

[window]
# title = "Profile"
# width = 390.0          # 200-8192
# height = 844.0         # 200-8192

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
