//! [`WebEngine`] backed by a `wry` child WebView.

use std::sync::Mutex;

use profilekit_common::{Bounds, ViewId};
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::engine::{EngineSetup, ScriptCompletion, WebEngine};
use crate::error::{ScriptError, WebViewError};
use crate::events::EventSink;

/// A `wry::WebView` embedded as a child of a native window.
pub struct WryEngine {
    webview: WebView,
    view: ViewId,
}

impl WryEngine {
    /// Build the WebView as a child of `window`, filling `setup.bounds`.
    pub fn build_as_child<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        setup: EngineSetup,
    ) -> Result<Self, WebViewError> {
        let EngineSetup {
            view,
            bounds,
            inspectable,
            transparent,
            user_agent,
            init_script,
            events,
        } = setup;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds_to_wry(&bounds))
            .with_transparent(transparent)
            .with_devtools(inspectable)
            .with_initialization_script(&init_script);

        if let Some(ua) = &user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = attach_ipc_handler(builder, events.clone(), view);
        builder = attach_page_load_handler(builder, events, view);

        let webview = builder.build_as_child(window)?;

        debug!(view = %view, inspectable, "wry webview attached");
        Ok(Self { webview, view })
    }

    /// The underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}

impl WebEngine for WryEngine {
    fn load_url(&mut self, url: &str) -> Result<(), WebViewError> {
        self.webview.load_url(url)?;
        Ok(())
    }

    fn evaluate_script(
        &self,
        script: &str,
        completion: ScriptCompletion,
    ) -> Result<(), WebViewError> {
        // wry takes an `Fn` callback; the completion must run at most once.
        let slot = Mutex::new(Some(completion));
        self.webview
            .evaluate_script_with_callback(&guarded_script(script), move |value| {
                let done = slot.lock().ok().and_then(|mut slot| slot.take());
                if let Some(done) = done {
                    done(script_outcome(&value));
                }
            })
            .map_err(WebViewError::from)
    }

    fn set_bounds(&mut self, bounds: Bounds) -> Result<(), WebViewError> {
        self.webview.set_bounds(bounds_to_wry(&bounds))?;
        Ok(())
    }

    fn url(&self) -> Option<String> {
        match self.webview.url() {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(view = %self.view, error = %e, "could not read webview url");
                None
            }
        }
    }
}

/// Key of the object a guarded script returns when the page throws.
const SCRIPT_ERROR_KEY: &str = "__profileKitError";

/// Wrap `script` so an exception in the page comes back as a value.
///
/// wry's evaluation callback only carries the JSON-encoded result, so a
/// thrown error is caught and returned as `{"__profileKitError": "..."}`.
fn guarded_script(script: &str) -> String {
    format!(
        "(function(){{try{{{script};return null}}catch(e){{return {{{SCRIPT_ERROR_KEY}:String(e)}}}}}})()"
    )
}

/// Map the JSON result of a guarded script to a completion outcome.
fn script_outcome(raw: &str) -> Result<String, ScriptError> {
    let error = serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|value| {
            value
                .get(SCRIPT_ERROR_KEY)
                .map(|e| e.as_str().map(str::to_owned).unwrap_or_else(|| e.to_string()))
        });
    match error {
        Some(message) => Err(ScriptError(message)),
        None => Ok(raw.to_owned()),
    }
}

/// Convert logical-pixel `Bounds` to a wry `Rect`.
pub fn bounds_to_wry(bounds: &Bounds) -> wry::Rect {
    let bounds = bounds.clamped();
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(bounds.x, bounds.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(bounds.width, bounds.height)),
    }
}

fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    view: ViewId,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body();
        if !events.post_raw(body) {
            debug!(view = %view, body_len = body.len(), "IPC message dropped: not a message envelope");
        }
    })
}

fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    view: ViewId,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| match event {
        PageLoadEvent::Started => {
            debug!(view = %view, url = %url, "page load started");
        }
        PageLoadEvent::Finished => {
            debug!(view = %view, url = %url, "page load finished");
            events.navigation_finished(Some(url));
        }
    })
}
