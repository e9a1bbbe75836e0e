use serde::{Deserialize, Serialize};

/// How a focus session ended
///
/// Persisted as a bare integer (0 = incomplete, 1 = completed) to stay
/// readable by older history files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SessionStatus {
    /// Cancelled by the user before the countdown ran out
    Incomplete,
    /// Countdown reached zero
    Completed,
}

impl SessionStatus {
    /// Glyph used in history listings
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Incomplete => "✗",
            Self::Completed => "✓",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<SessionStatus> for u8 {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Incomplete => 0,
            SessionStatus::Completed => 1,
        }
    }
}

impl TryFrom<u8> for SessionStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Incomplete),
            1 => Ok(Self::Completed),
            other => Err(format!("unknown session status {}", other)),
        }
    }
}

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Subject prompt and history list
    Focus,
    /// Countdown for the active subject
    Timer,
}
