//! Page <-> host message protocol.
//!
//! - **Page -> host**: page script calls
//!   `window.profileKit.postMessage(name, body)`, which posts
//!   `{"name": ..., "body": ...}` through `window.ipc.postMessage`.
//!   On WebView2 and WebKitGTK the bridge also provides
//!   `window.webkit.messageHandlers[name].postMessage(body)`. On WKWebView
//!   `messageHandlers` is a native object that ignores new keys, so pages
//!   there must use `window.profileKit.postMessage`.
//! - **Host -> page**: the host evaluates `setProfileImage('<base64>')`.

use serde::{Deserialize, Serialize};

/// Page function invoked to display a new profile image.
pub const PROFILE_IMAGE_FUNCTION: &str = "setProfileImage";

/// A message posted by page script on a named channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptMessage {
    /// Channel name.
    pub name: String,
    /// Message body as posted by the page. `null` when omitted.
    #[serde(default)]
    pub body: serde_json::Value,
}

impl ScriptMessage {
    pub fn new(name: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Parse a message envelope from a raw IPC body.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Build the `setProfileImage('<payload>')` call.
///
/// Base64 text (any alphabet, padded or not, empty included) is embedded
/// verbatim. Only characters that would end a single-quoted JavaScript
/// literal are escaped, which covers line-wrapped base64.
pub fn profile_image_script(base64: &str) -> String {
    format!("{PROFILE_IMAGE_FUNCTION}('{}')", escape_single_quoted(base64))
}

fn escape_single_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// JavaScript installed at document start that exposes the named channels
/// to page script.
pub fn bridge_init_script<'a>(channels: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<&str> = channels.into_iter().collect();
    let names_json = serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string());
    BRIDGE_INIT_TEMPLATE.replace("__CHANNELS__", &names_json)
}

const BRIDGE_INIT_TEMPLATE: &str = r#"
(function() {
    var channels = __CHANNELS__;

    function post(name, body) {
        window.ipc.postMessage(JSON.stringify({
            name: name,
            body: body === undefined ? null : body
        }));
    }

    window.profileKit = window.profileKit || {};
    window.profileKit.channels = channels.slice();
    window.profileKit.postMessage = function(name, body) {
        post(name, body);
    };

    // WebKit-style handlers for backends without a native
    // window.webkit.messageHandlers. WKWebView's object ignores the
    // assignment below.
    window.webkit = window.webkit || {};
    var handlers = window.webkit.messageHandlers;
    if (!handlers) {
        handlers = {};
        window.webkit.messageHandlers = handlers;
    }
    channels.forEach(function(name) {
        if (handlers[name]) {
            return;
        }
        try {
            handlers[name] = {
                postMessage: function(body) {
                    post(name, body);
                }
            };
        } catch (e) {}
    });
})();
"#;
