//! Export run coordinator.
//!
//! One invocation is one linear pass: load watermark, read changes,
//! publish each, commit the new watermark. The commit happens last and
//! only if something was published, so every earlier failure point
//! leaves the old watermark in place and the next run replays the
//! batch. Overlapping invocations need no lock: republishing a URL is
//! a byte-identical overwrite, and a lost race on the checkpoint write
//! only causes a few harmless republishes, never data loss.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checkpoint::Checkpoint;
use crate::error::Result;
use crate::history::HistoryReader;
use crate::queue::QueuePublisher;

/// Outcome of a successful export run.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// Entries published this run.
    pub count: usize,
    /// Queue directory the entries were written to.
    pub queue_dir: PathBuf,
    /// Watermark in effect after the run.
    pub watermark: i64,
}

/// Coordinator owning the three collaborators of a run.
///
/// All paths are injected; nothing here reads ambient globals.
pub struct Exporter {
    places_db: PathBuf,
    publisher: QueuePublisher,
    checkpoint: Checkpoint,
}

impl Exporter {
    #[must_use]
    pub fn new(
        places_db: impl Into<PathBuf>,
        queue_dir: impl Into<PathBuf>,
        state_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            places_db: places_db.into(),
            publisher: QueuePublisher::new(queue_dir),
            checkpoint: Checkpoint::new(state_file),
        }
    }

    /// Run one export pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be opened or read, a
    /// queue artifact cannot be written, or the checkpoint cannot be
    /// committed. On failure the checkpoint is never advanced, so the
    /// next run retries the whole batch.
    pub fn run(&self) -> Result<ExportReport> {
        fs::create_dir_all(self.publisher.queue_dir())?;
        if let Some(parent) = self.checkpoint.path().parent() {
            fs::create_dir_all(parent)?;
        }

        let watermark = self.checkpoint.load()?;
        tracing::info!("Starting export from watermark {}", watermark);

        let reader = HistoryReader::open(&self.places_db)?;
        let entries = reader.read_since(watermark)?;

        let mut count = 0usize;
        let mut max_seen = watermark;
        for entry in &entries {
            if self.publisher.publish(entry)? {
                if entry.last_visit_date > max_seen {
                    max_seen = entry.last_visit_date;
                }
                count += 1;
            }
        }

        if max_seen > watermark {
            self.checkpoint.commit(max_seen)?;
        }

        tracing::info!(
            "Exported {} entries, watermark {} -> {}",
            count,
            watermark,
            max_seen
        );
        Ok(ExportReport {
            count,
            queue_dir: self.publisher.queue_dir().to_path_buf(),
            watermark: max_seen,
        })
    }

    #[must_use]
    pub fn places_db(&self) -> &Path {
        &self.places_db
    }

    #[must_use]
    pub fn checkpoint(&self) -> &Checkpoint {
        &self.checkpoint
    }
}
