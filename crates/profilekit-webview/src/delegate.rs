//! Host-side observer interfaces.
//!
//! The container keeps only weak references. The host owns its delegates
//! (in an `Rc`) and may drop or clear them at any time; a delegate that is
//! gone is simply skipped.

use std::rc::{Rc, Weak};

use profilekit_common::ViewId;

use crate::error::NavigationError;

/// Navigation lifecycle of the embedded page.
pub trait NavigationDelegate {
    fn did_finish_loading(&self, view: ViewId, url: Option<&str>);

    fn did_fail_loading(&self, view: ViewId, url: Option<&str>, error: &NavigationError);
}

/// In-page actions that need the host.
pub trait ActionDelegate {
    /// The page asked to pick a new profile image (`camera-page-open`).
    fn did_select_profile_image(&self);
}

/// Messages posted by the page.
pub trait MessageDelegate {
    /// `js-error`
    fn did_receive_error(&self, message: &str);

    /// `form-submitted`
    fn did_receive_user_data(&self, data: &str);
}

/// The three optional delegate slots of a container.
#[derive(Debug, Default)]
pub struct Delegates {
    navigation: Option<Weak<dyn NavigationDelegate>>,
    action: Option<Weak<dyn ActionDelegate>>,
    message: Option<Weak<dyn MessageDelegate>>,
}

impl Delegates {
    pub fn set_navigation<D: NavigationDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<dyn NavigationDelegate> = Rc::downgrade(delegate);
        self.navigation = Some(weak);
    }

    pub fn set_action<D: ActionDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<dyn ActionDelegate> = Rc::downgrade(delegate);
        self.action = Some(weak);
    }

    pub fn set_message<D: MessageDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<dyn MessageDelegate> = Rc::downgrade(delegate);
        self.message = Some(weak);
    }

    pub fn clear_navigation(&mut self) {
        self.navigation = None;
    }

    pub fn clear_action(&mut self) {
        self.action = None;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn navigation(&self) -> Option<Rc<dyn NavigationDelegate>> {
        self.navigation.as_ref()?.upgrade()
    }

    pub fn action(&self) -> Option<Rc<dyn ActionDelegate>> {
        self.action.as_ref()?.upgrade()
    }

    pub fn message(&self) -> Option<Rc<dyn MessageDelegate>> {
        self.message.as_ref()?.upgrade()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counter {
        selections: Cell<u32>,
    }

    impl ActionDelegate for Counter {
        fn did_select_profile_image(&self) {
            self.selections.set(self.selections.get() + 1);
        }
    }

    #[test]
    fn slots_start_empty() {
        let delegates = Delegates::default();
        assert!(delegates.navigation().is_none());
        assert!(delegates.action().is_none());
        assert!(delegates.message().is_none());
    }

    #[test]
    fn set_slot_upgrades_while_host_holds_delegate() {
        let counter = Rc::new(Counter::default());
        let mut delegates = Delegates::default();
        delegates.set_action(&counter);

        delegates.action().unwrap().did_select_profile_image();
        assert_eq!(counter.selections.get(), 1);
    }

    #[test]
    fn slots_do_not_keep_delegates_alive() {
        let counter = Rc::new(Counter::default());
        let mut delegates = Delegates::default();
        delegates.set_action(&counter);
        assert_eq!(Rc::strong_count(&counter), 1);

        drop(counter);
        assert!(delegates.action().is_none());
    }

    #[test]
    fn clear_empties_every_slot() {
        let counter = Rc::new(Counter::default());
        let mut delegates = Delegates::default();
        delegates.set_action(&counter);
        delegates.clear();
        assert!(delegates.action().is_none());
    }
}
