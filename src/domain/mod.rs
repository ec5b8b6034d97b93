pub mod enums;
pub mod event;

pub use enums::{
    DispatchOutcome, NotificationCategory, PermissionOutcome, PermissionState, SuppressReason,
};
pub use event::{EventParseError, PushEvent};
