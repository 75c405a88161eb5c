//! Durable watermark state.
//!
//! The checkpoint is a single decimal integer in a file: the highest
//! `last_visit_date` ever successfully published. It is read at the
//! start of every run and advanced only after the whole batch is on
//! disk, so a crash at any earlier point just replays the unfinished
//! batch on the next run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RecollfoxError, Result};

/// Checkpoint store backed by a single scalar file.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    path: PathBuf,
}

impl Checkpoint {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the last committed watermark.
    ///
    /// A missing file or unparsable contents degrade to `0` (full
    /// re-export, which is safe because publication is idempotent).
    ///
    /// # Errors
    ///
    /// Returns `Io` only for read failures other than the file being
    /// absent, e.g. permission problems.
    pub fn load(&self) -> Result<i64> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(RecollfoxError::Io(e)),
        };

        match raw.trim().parse::<i64>() {
            Ok(value) => Ok(value),
            Err(_) => {
                tracing::warn!(
                    "Ignoring corrupt checkpoint at {}; starting from 0",
                    self.path.display()
                );
                Ok(0)
            }
        }
    }

    /// Durably write `value` as the new watermark.
    ///
    /// The parent directory is created on demand. The write goes to a
    /// temp file in the same directory which is then renamed over the
    /// checkpoint, so a reader sees either the old value or the new
    /// one, never a torn write.
    ///
    /// # Errors
    ///
    /// Returns `CheckpointCommit` if the directory cannot be created
    /// or the file cannot be written or renamed.
    pub fn commit(&self, value: i64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| RecollfoxError::checkpoint_commit(&self.path, e))?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, value.to_string())
            .map_err(|e| RecollfoxError::checkpoint_commit(&self.path, e))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| RecollfoxError::checkpoint_commit(&self.path, e))?;

        tracing::debug!("Committed watermark {} to {}", value, self.path.display());
        Ok(())
    }
}
