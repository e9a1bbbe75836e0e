use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or writing the focus history.
///
/// None of these are fatal: callers log them and keep working from the
/// in-memory copy (or an empty history on load).
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while playing the completion cue.
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Could not play completion sound: {0}")]
    Sound(#[source] std::io::Error),

    #[error("Could not show completion alert: {0}")]
    Alert(#[source] std::io::Error),
}
