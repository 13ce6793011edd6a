use serde::{Deserialize, Serialize};

/// The page the embedded view loads at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: "about:blank".into(),
        }
    }
}
