use tracing::debug;

use crate::channels::Dispatch;
use crate::engine::WebEngine;
use crate::events::BridgeEvent;

use super::ProfileWebView;

impl<E: WebEngine> ProfileWebView<E> {
    /// Deliver every queued engine event to the delegates, oldest first.
    ///
    /// Must be called on the UI thread. Returns how many delegate methods
    /// were invoked. Events with no registered (or no longer alive)
    /// delegate, unknown channel names and wrongly typed bodies are dropped.
    pub fn dispatch_pending(&self) -> usize {
        let mut delivered = 0;
        for event in self.events.drain() {
            if self.deliver(&event) {
                delivered += 1;
            }
        }
        delivered
    }

    fn deliver(&self, event: &BridgeEvent) -> bool {
        match event {
            BridgeEvent::NavigationFinished { url } => {
                let Some(delegate) = self.delegates.navigation() else {
                    return false;
                };
                delegate.did_finish_loading(self.id, url.as_deref());
                true
            }
            BridgeEvent::NavigationFailed { url, error } => {
                debug!(view = %self.id, url = ?url, error = %error, "navigation failed");
                let Some(delegate) = self.delegates.navigation() else {
                    return false;
                };
                delegate.did_fail_loading(self.id, url.as_deref(), error);
                true
            }
            BridgeEvent::Message(message) => match self.router.route(message) {
                Some(Dispatch::PageError(text)) => match self.delegates.message() {
                    Some(delegate) => {
                        delegate.did_receive_error(&text);
                        true
                    }
                    None => false,
                },
                Some(Dispatch::SelectProfileImage) => match self.delegates.action() {
                    Some(delegate) => {
                        delegate.did_select_profile_image();
                        true
                    }
                    None => false,
                },
                Some(Dispatch::UserData(data)) => match self.delegates.message() {
                    Some(delegate) => {
                        delegate.did_receive_user_data(&data);
                        true
                    }
                    None => false,
                },
                None => false,
            },
        }
    }
}
