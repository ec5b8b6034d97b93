/// Desktop notification backend
/// Uses osascript on macOS and the freedesktop notification bus elsewhere

use crate::domain::PermissionState;

use super::HostEnvironment;

#[cfg(target_os = "macos")]
use std::process::Command;

/// Real desktop session implementing [`HostEnvironment`]
///
/// Delivery policy (do-not-disturb, per-app muting, throttling) is mediated by
/// the OS itself and is not queryable from here, so permission reads as
/// granted and a denial manifests as a silently dropped notification. A
/// terminal process also cannot portably query focus, so the desktop binary
/// never focus-suppresses; both guards are exercised through the mock.
pub struct DesktopEnvironment;

impl DesktopEnvironment {
    pub fn new() -> Self {
        DesktopEnvironment
    }
}

impl HostEnvironment for DesktopEnvironment {
    fn supports_notifications(&self) -> bool {
        true
    }

    fn is_focused(&self) -> bool {
        false
    }

    fn permission(&self) -> PermissionState {
        PermissionState::Granted
    }

    fn request_permission(&self) -> PermissionState {
        PermissionState::Granted
    }

    fn show(&self, title: &str, body: &str) {
        #[cfg(target_os = "macos")]
        {
            let script = format!(
                r#"display notification "{}" with title "{}""#,
                body.replace('"', "\\\""),
                title.replace('"', "\\\"")
            );

            if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
                log::warn!("Failed to show notification: {}", e);
            }
        }

        #[cfg(not(target_os = "macos"))]
        {
            if let Err(e) = notify_rust::Notification::new()
                .summary(title)
                .body(body)
                .show()
            {
                log::warn!("Failed to show notification: {}", e);
            }
        }
    }
}
