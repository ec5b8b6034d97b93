use crate::domain::{DispatchOutcome, NotificationCategory, PermissionState, PushEvent, SuppressReason};
use crate::environment::HostEnvironment;

/// Handle one inbound push event
///
/// Runs synchronously to completion, stateless across events. Guard order is
/// fixed: focus suppression is an unconditional first short-circuit, then the
/// permission check, then category classification. A qualifying event produces
/// exactly one show call; every other path suppresses silently. No branch
/// errors out.
pub fn dispatch(env: &dyn HostEnvironment, event: &PushEvent) -> DispatchOutcome {
    if env.is_focused() {
        // don't push notifications while the receiving surface is active
        return DispatchOutcome::Suppressed(SuppressReason::Focused);
    }

    if env.permission() != PermissionState::Granted {
        return DispatchOutcome::Suppressed(SuppressReason::PermissionNotGranted);
    }

    match NotificationCategory::from_tag(&event.kind) {
        Some(category) => {
            env.show(category.title(), event.body());
            DispatchOutcome::Notified(category)
        }
        None => DispatchOutcome::Suppressed(SuppressReason::UnrecognizedCategory),
    }
}
