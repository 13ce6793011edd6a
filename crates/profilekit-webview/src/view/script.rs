use std::fmt;

use profilekit_common::ViewId;
use tracing::{debug, warn};

use crate::engine::{ScriptCompletion, WebEngine};
use crate::error::{ScriptError, WebViewError};
use crate::ipc::profile_image_script;

use super::ProfileWebView;

/// Identifies one `set_profile_image` evaluation in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptTicket(pub u64);

impl fmt::Display for ScriptTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "script-{}", self.0)
    }
}

impl<E: WebEngine> ProfileWebView<E> {
    /// Show `base64` as the profile image by evaluating
    /// `setProfileImage('<base64>')` in the page.
    ///
    /// Evaluation is asynchronous and each call logs its own outcome under
    /// the returned ticket; successive calls may complete in any order.
    /// Failures inside the page are logged only. An `Err` means the engine
    /// refused to take the script at all.
    pub fn set_profile_image(&mut self, base64: &str) -> Result<ScriptTicket, WebViewError> {
        let script = profile_image_script(base64);

        self.next_ticket += 1;
        let ticket = ScriptTicket(self.next_ticket);
        let view = self.id;

        debug!(view = %view, %ticket, payload_len = base64.len(), "setting profile image");

        let completion: ScriptCompletion =
            Box::new(move |outcome| log_script_outcome(view, ticket, &outcome));

        if let Err(e) = self.engine.evaluate_script(&script, completion) {
            warn!(view = %view, %ticket, error = %e, "profile image script not submitted");
            return Err(e);
        }
        Ok(ticket)
    }
}

fn log_script_outcome(view: ViewId, ticket: ScriptTicket, outcome: &Result<String, ScriptError>) {
    match outcome {
        Ok(_) => debug!(view = %view, %ticket, "profile image script completed"),
        Err(e) => warn!(view = %view, %ticket, error = %e, "JavaScript error while setting profile image"),
    }
}
