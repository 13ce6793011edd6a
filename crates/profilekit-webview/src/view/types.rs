/// Configuration for creating the embedded web control.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Enable the platform inspector (on in debug builds by default).
    pub inspectable: bool,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Custom user agent string. `None` keeps the platform default.
    pub user_agent: Option<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            inspectable: cfg!(debug_assertions),
            transparent: false,
            user_agent: None,
        }
    }
}
