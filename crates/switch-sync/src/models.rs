//! Switch Models
//!
//! Toggle state, the label state machine and the settled HTTP reply.

use http::StatusCode;

/// Checked state of the toggle, read at event time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    On,
    Off,
}

impl ToggleState {
    /// Label text shown right after the toggle
    pub fn label(self) -> &'static str {
        match self {
            ToggleState::On => "On",
            ToggleState::Off => "Off",
        }
    }
}

impl From<bool> for ToggleState {
    fn from(checked: bool) -> Self {
        if checked {
            ToggleState::On
        } else {
            ToggleState::Off
        }
    }
}

/// What the status label currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelState {
    Off,
    On,
    /// Raw body of a 200 reply
    ServerResponse(String),
    /// Reason phrase of a non-200 reply
    ServerError(String),
}

impl LabelState {
    pub fn text(&self) -> &str {
        match self {
            LabelState::Off => ToggleState::Off.label(),
            LabelState::On => ToggleState::On.label(),
            LabelState::ServerResponse(body) => body,
            LabelState::ServerError(reason) => reason,
        }
    }

    /// Label after a reply settles: exactly 200 shows the body, anything else the reason
    pub fn from_reply(reply: &SyncReply) -> Self {
        if reply.status == StatusCode::OK {
            LabelState::ServerResponse(reply.body.clone())
        } else {
            LabelState::ServerError(reply.reason())
        }
    }
}

impl From<ToggleState> for LabelState {
    fn from(state: ToggleState) -> Self {
        match state {
            ToggleState::On => LabelState::On,
            ToggleState::Off => LabelState::Off,
        }
    }
}

/// A settled response from the sync endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReply {
    pub status: u16,
    /// Platform status text, empty over HTTP/2
    pub status_text: String,
    pub body: String,
}

impl SyncReply {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Reason phrase: the platform text, else the canonical phrase, else the bare code
    pub fn reason(&self) -> String {
        if !self.status_text.is_empty() {
            return self.status_text.clone();
        }
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .map(str::to_string)
            .unwrap_or_else(|| self.status.to_string())
    }
}
