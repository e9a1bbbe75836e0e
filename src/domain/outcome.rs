use super::enums::SessionStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of one focus attempt
///
/// Field names match the stored JSON (`subject`, `status`, `key`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub subject: String,
    pub status: SessionStatus,
    /// Random v4 UUID string, `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`
    pub key: String,
}

impl SessionOutcome {
    pub fn new(subject: impl Into<String>, status: SessionStatus) -> Self {
        Self {
            subject: subject.into(),
            status,
            key: new_key(),
        }
    }

    pub fn completed(subject: impl Into<String>) -> Self {
        Self::new(subject, SessionStatus::Completed)
    }

    pub fn incomplete(subject: impl Into<String>) -> Self {
        Self::new(subject, SessionStatus::Incomplete)
    }
}

/// Generate a fresh outcome key
pub fn new_key() -> String {
    Uuid::new_v4().to_string()
}
