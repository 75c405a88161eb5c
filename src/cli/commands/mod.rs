//! Command implementations.

pub mod doctor;
pub mod export;
pub mod status;

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{RecollfoxError, Result};
use crate::profile;

/// Resolve the source database: explicit `--db` override, or profile
/// discovery.
///
/// # Errors
///
/// Returns `SourceNotFound` if an explicit path does not exist, or
/// `ProfileNotFound` if discovery comes up empty.
pub(crate) fn resolve_source(config: &Config) -> Result<PathBuf> {
    match &config.places_db {
        Some(path) => {
            if path.is_file() {
                Ok(path.clone())
            } else {
                Err(RecollfoxError::SourceNotFound(path.clone()))
            }
        }
        None => profile::find_places_db().ok_or(RecollfoxError::ProfileNotFound),
    }
}
