//! Embedded web view for the profile editor page.
//!
//! Wraps the `wry` crate to provide:
//! - One managed WebView per embedding container
//! - Three named script-message channels (`camera-page-open`,
//!   `form-submitted`, `js-error`) routed to host delegates
//! - Navigation lifecycle forwarding (finished / failed)
//! - The `setProfileImage` script call

pub mod channels;
pub mod delegate;
pub mod engine;
pub mod error;
pub mod events;
pub mod ipc;
pub mod view;
pub mod wry_engine;

pub use channels::{ChannelRouter, Dispatch, MessageChannel};
pub use delegate::{ActionDelegate, Delegates, MessageDelegate, NavigationDelegate};
pub use engine::{EngineSetup, ScriptCompletion, WebEngine};
pub use error::{NavigationError, ScriptError, WebViewError};
pub use events::{BridgeEvent, EventSink};
pub use ipc::ScriptMessage;
pub use view::{ProfileWebView, ScriptTicket, WebViewConfig};
pub use wry_engine::WryEngine;
