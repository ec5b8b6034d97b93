use serde::Deserialize;
use thiserror::Error;

/// A server-pushed event as delivered by the external transport
///
/// One JSON object per line, e.g.
/// `{"type": "newMessage:680d0fa3", "message": "hi there"}`.
/// Only the two fields below are inspected; anything else is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PushEvent {
    /// Category tag, e.g. "newMessage:<chat-id>" or "newFriend"
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional literal body text, shown verbatim when present
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure to decode an inbound event line
#[derive(Debug, Error)]
pub enum EventParseError {
    #[error("invalid event JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PushEvent {
    /// Decode a single JSON line from the event stream
    pub fn from_json_line(line: &str) -> Result<Self, EventParseError> {
        Ok(serde_json::from_str(line)?)
    }

    /// Body text for the shown notification, empty when the payload carries none
    pub fn body(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}
