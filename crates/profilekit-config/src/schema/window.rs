use serde::{Deserialize, Serialize};

/// Host window configuration. Sizes are logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Valid range: 200-8192.
    pub width: f64,
    /// Valid range: 200-8192.
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Profile".into(),
            width: 390.0,
            height: 844.0,
        }
    }
}
