/// Category of an inbound push event
///
/// Category tags arrive as strings like "newMessage:<chat-id>"; only the
/// segment before the first ':' identifies the category. Matching is exact
/// against this closed set, never by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCategory {
    NewMessage,
    NewFriend,
}

impl NotificationCategory {
    /// Parse a category from an event tag like "newMessage:680d0fa3"
    pub fn from_tag(tag: &str) -> Option<Self> {
        let segment = tag.split(':').next().unwrap_or(tag);
        match segment {
            "newMessage" => Some(Self::NewMessage),
            "newFriend" => Some(Self::NewFriend),
            _ => None,
        }
    }

    /// Notification title shown for this category
    pub fn title(&self) -> &'static str {
        match self {
            Self::NewMessage => "You've got new message",
            Self::NewFriend => "You've got a new friend",
        }
    }
}

/// Notification permission as reported by the host environment
///
/// Owned entirely by the host; read-only from this crate's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Default,
    Granted,
    Denied,
}

/// Normalized result of a one-shot permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionOutcome {
    /// User granted permission
    Allowed,
    /// User denied or dismissed the prompt
    Blocked,
    /// Host environment offers no notification capability
    Unsupported,
}

impl PermissionOutcome {
    /// Sentinel string recorded in the diagnostic log
    pub fn sentinel(&self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::Blocked => "blocked",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Terminal state of a single dispatched event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A native notification was shown
    Notified(NotificationCategory),
    /// No visible effect
    Suppressed(SuppressReason),
}

/// Why a dispatched event produced no notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// The receiving surface has input focus
    Focused,
    /// Permission was never granted
    PermissionNotGranted,
    /// Category tag matched nothing in the closed set
    UnrecognizedCategory,
}
