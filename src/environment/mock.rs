use std::cell::{Cell, RefCell};

use crate::domain::PermissionState;

use super::HostEnvironment;

/// A notification recorded by [`MockEnvironment::show`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownNotification {
    pub title: String,
    pub body: String,
}

/// Scripted host environment for deterministic tests
pub struct MockEnvironment {
    pub supported: bool,
    pub focused: bool,
    pub permission: PermissionState,
    /// What the user "answers" when prompted
    pub prompt_answer: PermissionState,
    prompts: Cell<usize>,
    shown: RefCell<Vec<ShownNotification>>,
}

impl MockEnvironment {
    /// A supported, unfocused environment with permission granted
    pub fn granted() -> Self {
        Self::new(true, false, PermissionState::Granted)
    }

    pub fn new(supported: bool, focused: bool, permission: PermissionState) -> Self {
        MockEnvironment {
            supported,
            focused,
            permission,
            prompt_answer: permission,
            prompts: Cell::new(0),
            shown: RefCell::new(Vec::new()),
        }
    }

    /// How many times the permission prompt was raised
    pub fn prompt_count(&self) -> usize {
        self.prompts.get()
    }

    /// Every notification shown so far, in order
    pub fn shown(&self) -> Vec<ShownNotification> {
        self.shown.borrow().clone()
    }
}

impl HostEnvironment for MockEnvironment {
    fn supports_notifications(&self) -> bool {
        self.supported
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn permission(&self) -> PermissionState {
        self.permission
    }

    fn request_permission(&self) -> PermissionState {
        self.prompts.set(self.prompts.get() + 1);
        self.prompt_answer
    }

    fn show(&self, title: &str, body: &str) {
        self.shown.borrow_mut().push(ShownNotification {
            title: title.to_string(),
            body: body.to_string(),
        });
    }
}
