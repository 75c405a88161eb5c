//! Configuration management for `recollfox`.
//!
//! All filesystem paths the exporter touches are explicit values
//! resolved once at startup and passed into the coordinator, so tests
//! can point everything at temporary directories. Precedence per
//! value: CLI flag, then environment variable, then built-in default.

use std::path::PathBuf;

use crate::error::{RecollfoxError, Result};

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit path to a places database. `None` means discover the
    /// default Firefox profile at startup.
    pub places_db: Option<PathBuf>,
    /// Recoll web-queue drop directory (`RECOLL_WEBQUEUE`).
    pub queue_dir: PathBuf,
    /// Watermark checkpoint file (`RECOLLFOX_STATE_FILE`).
    pub state_file: PathBuf,
}

impl Config {
    /// Build a config from optional overrides, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` if no home directory can be determined while a
    /// default path is needed.
    pub fn resolve(
        places_db: Option<PathBuf>,
        queue_dir: Option<PathBuf>,
        state_file: Option<PathBuf>,
    ) -> Result<Self> {
        let queue_dir = match queue_dir {
            Some(dir) => dir,
            None => home_dir()?.join(".recollweb").join("ToIndex"),
        };

        let state_file = match state_file {
            Some(path) => path,
            None => data_dir()?.join("recollfox").join("last_visit_date"),
        };

        Ok(Self {
            places_db,
            queue_dir,
            state_file,
        })
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| RecollfoxError::Config("cannot determine home directory".to_string()))
}

fn data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| RecollfoxError::Config("cannot determine data directory".to_string()))
}
