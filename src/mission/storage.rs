//! Durable mission persistence.
//!
//! The [`MissionStorage`] trait has whole-collection overwrite semantics:
//! `save` rewrites the entire sequence, `load` reads it back (empty if
//! nothing was ever saved). [`JsonFileStorage`] is the production
//! implementation — pretty-printed JSON written to a temp file and
//! renamed into place, so a crash mid-save leaves the prior contents
//! readable. The trait seam lets tests inject in-memory or failing
//! storage.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::mission::types::Mission;

/// Durable storage for the ordered mission sequence.
pub trait MissionStorage: Send + Sync {
    /// Load the full mission sequence. An absent backing file is an
    /// empty sequence, not an error.
    fn load(&self) -> Result<Vec<Mission>>;

    /// Persist the full mission sequence, replacing any prior contents.
    /// Either the new sequence is fully written or the old one remains
    /// readable.
    fn save(&self, missions: &[Mission]) -> Result<()>;
}

/// JSON-file-backed storage.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MissionStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Mission>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, missions: &[Mission]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Atomic write: tmp sibling + rename
        let tmp_path = self.path.with_extension("json.tmp");
        let contents = serde_json::to_string_pretty(missions)?;
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), count = missions.len(), "missions saved");
        Ok(())
    }
}
