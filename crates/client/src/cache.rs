//! Persisted snapshot of the client task list
//!
//! Plays the role of the browser's local storage: the full task array
//! serialized as JSON under a fixed file name in a caller-chosen directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tm_core::task::Task;

use crate::error::Result;

/// File name of the persisted snapshot
const SNAPSHOT_FILE: &str = "task-manager-tasks.json";

/// Local snapshot store
pub struct SnapshotCache {
    path: PathBuf,
}

impl SnapshotCache {
    /// Create a cache rooted at the given directory
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SNAPSHOT_FILE),
        }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted snapshot
    ///
    /// `Ok(None)` means no snapshot has been stored. A snapshot that cannot
    /// be read or parsed is an error; callers fall back to a network fetch.
    pub fn load(&self) -> Result<Option<Vec<Task>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let tasks = serde_json::from_str(&content)?;
        Ok(Some(tasks))
    }

    /// Persist the full task list
    ///
    /// An empty list removes the stored snapshot instead of writing `[]`,
    /// keeping "no data yet" and "empty list" distinguishable.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if tasks.is_empty() {
            return self.clear();
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string(tasks)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Remove the stored snapshot if present
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
