//! The embedding container.
//!
//! `ProfileWebView` owns one web engine, the channel router and the three
//! delegate slots. Engine callbacks are queued; the host calls
//! [`ProfileWebView::dispatch_pending`] from its UI loop to deliver them.

use std::rc::Rc;

use profilekit_common::{Bounds, ViewId};
use tracing::{debug, warn};

use crate::channels::ChannelRouter;
use crate::delegate::{ActionDelegate, Delegates, MessageDelegate, NavigationDelegate};
use crate::engine::{EngineSetup, WebEngine};
use crate::error::{NavigationError, WebViewError};
use crate::events::EventSink;
use crate::ipc::bridge_init_script;

mod dispatch;
mod script;
mod types;


pub use script::ScriptTicket;
pub use types::WebViewConfig;

/// A native view hosting exactly one embedded web control.
pub struct ProfileWebView<E: WebEngine> {
    id: ViewId,
    engine: E,
    bounds: Bounds,
    router: ChannelRouter,
    events: EventSink,
    delegates: Delegates,
    next_ticket: u64,
}

impl<E: WebEngine> ProfileWebView<E> {
    /// Create the container and its engine.
    ///
    /// `attach` receives the engine setup (bounds, inspector flag, bridge
    /// script, event sink) and builds the platform control, e.g.
    /// `|setup| WryEngine::build_as_child(&window, setup)`.
    pub fn initialize<F>(
        id: ViewId,
        bounds: Bounds,
        config: &WebViewConfig,
        attach: F,
    ) -> Result<Self, WebViewError>
    where
        F: FnOnce(EngineSetup) -> Result<E, WebViewError>,
    {
        let router = ChannelRouter::new();
        let events = EventSink::new();

        let setup = EngineSetup {
            view: id,
            bounds,
            inspectable: config.inspectable,
            transparent: config.transparent,
            user_agent: config.user_agent.clone(),
            init_script: bridge_init_script(router.names()),
            events: events.clone(),
        };
        let engine = attach(setup)?;

        debug!(
            view = %id,
            channels = router.len(),
            inspectable = config.inspectable,
            "profile webview initialized"
        );

        Ok(Self {
            id,
            engine,
            bounds,
            router,
            events,
            delegates: Delegates::default(),
            next_ticket: 0,
        })
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Resize the container. The engine stays pinned to all four edges.
    pub fn set_bounds(&mut self, bounds: Bounds) -> Result<(), WebViewError> {
        self.bounds = bounds;
        self.engine.set_bounds(bounds)
    }

    /// Navigate to `url`. Failures are reported to the navigation delegate
    /// on a later [`dispatch_pending`](Self::dispatch_pending).
    pub fn load(&mut self, url: &str) {
        debug!(view = %self.id, url, "loading");
        if let Err(e) = self.engine.load_url(url) {
            warn!(view = %self.id, url, error = %e, "navigation refused");
            self.events
                .navigation_failed(Some(url.to_string()), NavigationError::from(e));
        }
    }

    /// The URL the engine currently displays.
    pub fn url(&self) -> Option<String> {
        self.engine.url()
    }

    pub fn set_navigation_delegate<D: NavigationDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        self.delegates.set_navigation(delegate);
    }

    pub fn set_action_delegate<D: ActionDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        self.delegates.set_action(delegate);
    }

    pub fn set_message_delegate<D: MessageDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        self.delegates.set_message(delegate);
    }

    /// Drop all delegate registrations. Hosts call this before tearing
    /// their delegates down.
    pub fn clear_delegates(&mut self) {
        self.delegates.clear();
    }

    pub fn delegates_mut(&mut self) -> &mut Delegates {
        &mut self.delegates
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
