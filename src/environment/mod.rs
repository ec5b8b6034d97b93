pub mod desktop;
#[cfg(test)]
pub mod mock;

use crate::domain::PermissionState;

pub use desktop::DesktopEnvironment;

/// Host capabilities the notifier depends on
///
/// Focus and permission are ambient host state; abstracting them behind this
/// trait lets the dispatch logic run deterministically in tests without a real
/// desktop session.
pub trait HostEnvironment {
    /// Whether the host offers a native notification capability at all
    fn supports_notifications(&self) -> bool;

    /// Whether the receiving surface currently has input focus
    fn is_focused(&self) -> bool;

    /// Current notification permission, read at dispatch time
    fn permission(&self) -> PermissionState;

    /// Prompt the user once for permission, blocking until decided
    ///
    /// The platform dedupes repeat prompts; calling this again after a
    /// decision is a no-op that returns the recorded state.
    fn request_permission(&self) -> PermissionState;

    /// Show a native notification; fire-and-forget, no return value consumed
    fn show(&self, title: &str, body: &str);
}
