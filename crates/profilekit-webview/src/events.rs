//! Events queued by engine callbacks for the container to dispatch.

use std::sync::{Arc, Mutex};

use crate::error::NavigationError;
use crate::ipc::ScriptMessage;

/// Something the embedded page or engine reported.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeEvent {
    /// The page finished loading.
    NavigationFinished { url: Option<String> },
    /// A navigation failed.
    NavigationFailed {
        url: Option<String>,
        error: NavigationError,
    },
    /// The page posted a message on a named channel.
    Message(ScriptMessage),
}

/// Shared event queue. Engine callbacks push, the container drains on the
/// UI thread.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    queue: Arc<Mutex<Vec<BridgeEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: BridgeEvent) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push(event);
        }
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<BridgeEvent> {
        let mut queue = self
            .queue
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *queue)
    }

    pub fn len(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn navigation_finished(&self, url: Option<String>) {
        self.push(BridgeEvent::NavigationFinished { url });
    }

    pub fn navigation_failed(&self, url: Option<String>, error: NavigationError) {
        self.push(BridgeEvent::NavigationFailed { url, error });
    }

    /// Queue a raw IPC body from the page. Returns `false` when the body is
    /// not a valid message envelope, in which case nothing is queued.
    pub fn post_raw(&self, raw: &str) -> bool {
        match ScriptMessage::from_json(raw) {
            Some(message) => {
                self.push(BridgeEvent::Message(message));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_events_in_order_and_empties() {
        let sink = EventSink::new();
        sink.navigation_finished(Some("https://a.example".into()));
        sink.post_raw(r#"{"name":"js-error","body":"x"}"#);
        assert_eq!(sink.len(), 2);

        let events = sink.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], BridgeEvent::NavigationFinished { .. }));
        assert!(matches!(events[1], BridgeEvent::Message(_)));
        assert!(sink.is_empty());
    }

    #[test]
    fn clones_share_one_queue() {
        let sink = EventSink::new();
        let engine_side = sink.clone();
        engine_side.navigation_failed(None, NavigationError::new("offline"));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn post_raw_rejects_malformed_envelopes() {
        let sink = EventSink::new();
        assert!(!sink.post_raw("not json"));
        assert!(!sink.post_raw(r#""just a string""#));
        assert!(!sink.post_raw(r#"{"body":"no name"}"#));
        assert!(sink.is_empty());
    }
}
