//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod page;
mod webview;
mod window;

pub use logging::*;
pub use page::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the profile host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileKitConfig {
    pub page: PageConfig,
    pub webview: WebViewSettings,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: ProfileKitConfig = toml::from_str("").unwrap();
        assert_eq!(config.page.url, PageConfig::default().url);
        assert_eq!(config.window.width, 390.0);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: ProfileKitConfig = toml::from_str(
            r#"
[webview]
inspectable = true

[window]
title = "Edit profile"
"#,
        )
        .unwrap();
        assert!(config.webview.inspectable);
        assert!(!config.webview.transparent);
        assert_eq!(config.window.title, "Edit profile");
        assert_eq!(config.window.height, 844.0);
    }
}
