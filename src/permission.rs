use crate::domain::{PermissionOutcome, PermissionState};
use crate::environment::HostEnvironment;

/// Ask the user once for notification permission
///
/// If the host offers no notification capability, records a diagnostic and
/// returns without prompting. Otherwise raises the one-shot prompt and records
/// a normalized sentinel for the decision. Never errors; all failure is
/// absorbed into the log.
pub fn request_notification_permission(env: &dyn HostEnvironment) -> PermissionOutcome {
    if !env.supports_notifications() {
        log::warn!("This environment does not support notifications.");
        return PermissionOutcome::Unsupported;
    }

    let outcome = match env.request_permission() {
        PermissionState::Granted => PermissionOutcome::Allowed,
        // denied and dismissed collapse to the same sentinel
        PermissionState::Default | PermissionState::Denied => PermissionOutcome::Blocked,
    };

    log::info!("Notification permission: {}", outcome.sentinel());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::mock::MockEnvironment;

    #[test]
    fn test_unsupported_environment_never_prompts() {
        let env = MockEnvironment::new(false, false, PermissionState::Default);
        let outcome = request_notification_permission(&env);
        assert_eq!(outcome, PermissionOutcome::Unsupported);
        assert_eq!(env.prompt_count(), 0);
    }

    #[test]
    fn test_granted_prompt_records_allowed() {
        let mut env = MockEnvironment::new(true, false, PermissionState::Default);
        env.prompt_answer = PermissionState::Granted;
        let outcome = request_notification_permission(&env);
        assert_eq!(outcome, PermissionOutcome::Allowed);
        assert_eq!(env.prompt_count(), 1);
    }

    #[test]
    fn test_denied_prompt_records_blocked() {
        let mut env = MockEnvironment::new(true, false, PermissionState::Default);
        env.prompt_answer = PermissionState::Denied;
        assert_eq!(
            request_notification_permission(&env),
            PermissionOutcome::Blocked
        );
    }

    #[test]
    fn test_dismissed_prompt_records_blocked() {
        // dismissal leaves the permission in its default state
        let env = MockEnvironment::new(true, false, PermissionState::Default);
        assert_eq!(
            request_notification_permission(&env),
            PermissionOutcome::Blocked
        );
        assert_eq!(env.prompt_count(), 1);
    }
}
