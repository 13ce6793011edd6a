use serde::{Deserialize, Serialize};

/// Settings applied to the embedded web control when it is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Enable the platform inspector. Defaults to on in debug builds only.
    pub inspectable: bool,
    pub transparent: bool,
    pub user_agent: Option<String>,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            inspectable: cfg!(debug_assertions),
            transparent: false,
            user_agent: None,
        }
    }
}
