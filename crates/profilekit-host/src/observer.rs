//! The host's delegate: logs page events and queues follow-up work for
//! the event loop.

use std::cell::RefCell;

use profilekit_common::ViewId;
use profilekit_webview::{ActionDelegate, MessageDelegate, NavigationDelegate, NavigationError};

/// Work the page asked the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    SendProfileImage,
}

#[derive(Debug, Default)]
pub struct HostObserver {
    commands: RefCell<Vec<HostCommand>>,
    submissions: RefCell<Vec<String>>,
}

impl HostObserver {
    pub fn take_commands(&self) -> Vec<HostCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    /// Form payloads received so far.
    pub fn submissions(&self) -> Vec<String> {
        self.submissions.borrow().clone()
    }
}

impl NavigationDelegate for HostObserver {
    fn did_finish_loading(&self, view: ViewId, url: Option<&str>) {
        tracing::info!(view = %view, url = url.unwrap_or("<unknown>"), "page loaded");
    }

    fn did_fail_loading(&self, view: ViewId, url: Option<&str>, error: &NavigationError) {
        tracing::error!(
            view = %view,
            url = url.unwrap_or("<unknown>"),
            error = %error,
            "page failed to load"
        );
    }
}

impl ActionDelegate for HostObserver {
    fn did_select_profile_image(&self) {
        tracing::info!("page requested a profile image");
        self.commands.borrow_mut().push(HostCommand::SendProfileImage);
    }
}

impl MessageDelegate for HostObserver {
    fn did_receive_error(&self, message: &str) {
        tracing::warn!(error = message, "page script error");
    }

    fn did_receive_user_data(&self, data: &str) {
        tracing::info!(bytes = data.len(), "profile form submitted");
        // Submitted form data is the host's output.
        println!("{data}");
        self.submissions.borrow_mut().push(data.to_string());
    }
}
