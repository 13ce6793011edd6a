//! Named message channels and their dispatch rules.

use std::collections::HashMap;

use crate::ipc::ScriptMessage;

/// The fixed set of channels the page may post on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageChannel {
    /// The page asks the host to pick a new profile image. Any body.
    CameraPageOpen,
    /// The page submitted the profile form. String body.
    FormSubmitted,
    /// The page reports a script error. String body.
    JsError,
}

impl MessageChannel {
    pub const ALL: [MessageChannel; 3] = [
        MessageChannel::CameraPageOpen,
        MessageChannel::FormSubmitted,
        MessageChannel::JsError,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CameraPageOpen => "camera-page-open",
            Self::FormSubmitted => "form-submitted",
            Self::JsError => "js-error",
        }
    }
}

/// A routed message with its payload checked against the channel's rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    PageError(String),
    SelectProfileImage,
    UserData(String),
}

/// Maps channel names to channels. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ChannelRouter {
    routes: HashMap<&'static str, MessageChannel>,
}

impl ChannelRouter {
    pub fn new() -> Self {
        Self {
            routes: MessageChannel::ALL
                .iter()
                .map(|channel| (channel.name(), *channel))
                .collect(),
        }
    }

    /// Registered channel names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        MessageChannel::ALL
            .iter()
            .map(|channel| channel.name())
            .filter(|name| self.routes.contains_key(name))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn channel(&self, name: &str) -> Option<MessageChannel> {
        self.routes.get(name).copied()
    }

    /// Route a message. `None` for unknown names and for bodies of the
    /// wrong type.
    pub fn route(&self, message: &ScriptMessage) -> Option<Dispatch> {
        match self.channel(&message.name)? {
            MessageChannel::JsError => message
                .body
                .as_str()
                .map(|text| Dispatch::PageError(text.to_owned())),
            MessageChannel::CameraPageOpen => Some(Dispatch::SelectProfileImage),
            MessageChannel::FormSubmitted => message
                .body
                .as_str()
                .map(|data| Dispatch::UserData(data.to_owned())),
        }
    }
}

impl Default for ChannelRouter {
    fn default() -> Self {
        Self::new()
    }
}
