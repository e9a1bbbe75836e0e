use super::files::{atomic_write, read_file};
use crate::domain::SessionOutcome;
use crate::error::PersistenceError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Ordered list of finished focus sessions backed by a JSON file
///
/// Mutations only touch memory and mark the store dirty; the event loop
/// flushes it with [`HistoryStore::persist`] on the next save cycle.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<SessionOutcome>,
    dirty: bool,
}

impl HistoryStore {
    /// Empty store that will persist to `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries: Vec::new(),
            dirty: false,
        }
    }

    /// Load the history stored at `path`.
    ///
    /// A missing file yields an empty history. An unreadable or corrupt file
    /// is logged and also yields an empty history.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let mut store = Self::new(path);
        match store.read() {
            Ok(entries) => {
                debug!(count = entries.len(), path = %store.path.display(), "loaded focus history");
                store.entries = entries;
            }
            Err(e) => warn!("{}; starting with empty history", e),
        }
        store
    }

    fn read(&self) -> Result<Vec<SessionOutcome>, PersistenceError> {
        let content = read_file(&self.path).map_err(|source| PersistenceError::Read {
            path: self.path.clone(),
            source,
        })?;

        match content {
            None => Ok(Vec::new()),
            Some(text) if text.trim().is_empty() => Ok(Vec::new()),
            Some(text) => serde_json::from_str(&text).map_err(|source| PersistenceError::Parse {
                path: self.path.clone(),
                source,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[SessionOutcome] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when memory holds changes not yet written
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Add an outcome at the end
    pub fn append(&mut self, outcome: SessionOutcome) {
        self.entries.push(outcome);
        self.dirty = true;
    }

    /// Drop every outcome
    pub fn clear(&mut self) {
        self.entries.clear();
        self.dirty = true;
    }

    /// Write the full history, replacing whatever is on disk
    pub fn persist(&mut self) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&self.entries)?;
        atomic_write(&self.path, &json).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.dirty = false;
        debug!(count = self.entries.len(), "persisted focus history");
        Ok(())
    }
}
