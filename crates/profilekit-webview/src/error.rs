//! Error types for the embedded view.

use profilekit_common::ProfileKitError;

/// Failures the container reports synchronously to its caller.
#[derive(Debug, thiserror::Error)]
pub enum WebViewError {
    #[error("web engine error: {0}")]
    Engine(String),
}

impl From<wry::Error> for WebViewError {
    fn from(e: wry::Error) -> Self {
        Self::Engine(e.to_string())
    }
}

impl From<WebViewError> for ProfileKitError {
    fn from(e: WebViewError) -> Self {
        ProfileKitError::WebView(e.to_string())
    }
}

/// A navigation that could not be completed. Delivered to the
/// navigation delegate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct NavigationError {
    message: String,
}

impl NavigationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<WebViewError> for NavigationError {
    fn from(e: WebViewError) -> Self {
        Self::new(e.to_string())
    }
}

/// A script evaluation that failed inside the page. Logged, never
/// delivered to a delegate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("script evaluation failed: {0}")]
pub struct ScriptError(pub String);
