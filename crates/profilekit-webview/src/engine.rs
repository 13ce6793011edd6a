//! The seam between the container and the platform web control.

use profilekit_common::{Bounds, ViewId};

use crate::error::{ScriptError, WebViewError};
use crate::events::EventSink;

/// Called once with the outcome of a script evaluation.
pub type ScriptCompletion = Box<dyn FnOnce(Result<String, ScriptError>) + Send + 'static>;

/// Everything an engine needs to build its control.
#[derive(Debug, Clone)]
pub struct EngineSetup {
    pub view: ViewId,
    /// Rect the control must fill, in parent-window coordinates.
    pub bounds: Bounds,
    /// Enable the platform inspector.
    pub inspectable: bool,
    pub transparent: bool,
    pub user_agent: Option<String>,
    /// Script installed at document start on every page.
    pub init_script: String,
    /// Queue for navigation and message callbacks.
    pub events: EventSink,
}

/// A platform web control embedded in a container.
///
/// Implementations push navigation and message callbacks into the
/// [`EventSink`] from their [`EngineSetup`]; they never call delegates.
pub trait WebEngine {
    /// Start a navigation. `Err` only when the control refuses the request
    /// outright; load failures arrive through the event sink.
    fn load_url(&mut self, url: &str) -> Result<(), WebViewError>;

    /// Evaluate `script` in the page. On `Ok`, `completion` runs later
    /// with the result, or with `Err(ScriptError)` when the page threw;
    /// on `Err` it is dropped without running.
    fn evaluate_script(&self, script: &str, completion: ScriptCompletion)
        -> Result<(), WebViewError>;

    fn set_bounds(&mut self, bounds: Bounds) -> Result<(), WebViewError>;

    /// The URL currently displayed, if the control knows it.
    fn url(&self) -> Option<String>;
}
