//! Read-only change reader for the Firefox places database.
//!
//! The database is opened through an immutable snapshot URI
//! (`file:...?immutable=1`). Firefox holds its own locks on
//! `places.sqlite` while running; the immutable open bypasses locking
//! entirely, so the exporter never blocks the browser and is never
//! blocked by it, and cannot mutate the source.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Row};

use crate::error::{RecollfoxError, Result};
use crate::model::HistoryEntry;

/// Reader over a places database.
#[derive(Debug)]
pub struct HistoryReader {
    conn: Connection,
}

impl HistoryReader {
    /// Open `places.sqlite` as an immutable read-only snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SourceNotFound` if the file does not exist, or
    /// `Source` if it cannot be opened as a database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(RecollfoxError::SourceNotFound(path.to_path_buf()));
        }

        let uri = format!("file:{}?immutable=1", path.display());
        let conn = Connection::open_with_flags(
            uri,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        Ok(Self { conn })
    }

    /// Fetch every visible history entry strictly newer than
    /// `watermark`, ascending by visit time.
    ///
    /// Hidden entries and `place:` pseudo-URLs (Firefox-internal
    /// virtual views with no indexable content) are filtered at the
    /// source. An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Source` if the query fails, e.g. the `moz_places`
    /// schema is absent.
    pub fn read_since(&self, watermark: i64) -> Result<Vec<HistoryEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT url, title, last_visit_date, description
             FROM moz_places
             WHERE last_visit_date > ?1 AND hidden = 0 AND url NOT LIKE 'place:%'
             ORDER BY last_visit_date ASC",
        )?;

        let mut rows = stmt.query([watermark])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(HistoryEntry {
                url: lossy_text(row, 0)?,
                title: lossy_text(row, 1)?,
                last_visit_date: row.get(2)?,
                description: lossy_text(row, 3)?,
            });
        }

        tracing::debug!("Read {} entries newer than {}", entries.len(), watermark);
        Ok(entries)
    }
}

/// Decode a TEXT column permissively.
///
/// Firefox history can contain titles pasted from anywhere; invalid
/// UTF-8 byte sequences are replaced rather than failing the batch.
/// NULL decodes to the empty string.
fn lossy_text(row: &Row<'_>, idx: usize) -> Result<String> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(String::new()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
        other => Err(RecollfoxError::Source(
            rusqlite::Error::InvalidColumnType(idx, format!("column {idx}"), other.data_type()),
        )),
    }
}
