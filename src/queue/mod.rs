//! Recoll web-queue publisher.
//!
//! Each exported URL becomes a pair of files in the queue directory,
//! both named by the URL's content key:
//!
//! - `_<key>` - metadata dot file: URL, hit type, MIME type, then
//!   `t:key = value` attribute lines
//! - `<key>`  - content file: a minimal HTML document
//!
//! The key depends on the URL alone, so re-exporting a URL at a later
//! visit time overwrites the same pair in place instead of creating
//! duplicates. Both writes are whole-file replacements.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{RecollfoxError, Result};
use crate::model::HistoryEntry;

/// Hit type tag recorded in the metadata file.
const HIT_TYPE: &str = "WebHistory";

/// MIME type of the generated content documents.
const MIME_TYPE: &str = "text/html";

/// Publisher writing queue artifacts into a drop directory.
#[derive(Debug, Clone)]
pub struct QueuePublisher {
    queue_dir: PathBuf,
}

impl QueuePublisher {
    #[must_use]
    pub fn new(queue_dir: impl Into<PathBuf>) -> Self {
        Self {
            queue_dir: queue_dir.into(),
        }
    }

    #[must_use]
    pub fn queue_dir(&self) -> &Path {
        &self.queue_dir
    }

    /// Write the metadata and content files for one entry.
    ///
    /// Returns `true` if the pair was written, `false` if the entry
    /// was unpublishable (empty URL) and skipped.
    ///
    /// A crash between the two writes can leave the pair stale
    /// relative to each other for this one entry; the next run
    /// republishes both files, which bounds the inconsistency window
    /// to a single entry.
    ///
    /// # Errors
    ///
    /// Returns `QueueWrite` on any filesystem failure. Artifacts
    /// already written for earlier entries are unaffected.
    pub fn publish(&self, entry: &HistoryEntry) -> Result<bool> {
        if entry.url.is_empty() {
            tracing::debug!("Skipping entry with empty URL at {}", entry.last_visit_date);
            return Ok(false);
        }

        let key = content_key(&entry.url);

        let meta_path = self.queue_dir.join(format!("_{key}"));
        let metadata = format!(
            "{}\n{HIT_TYPE}\n{MIME_TYPE}\nt:title = {}\n",
            entry.url, entry.title
        );
        fs::write(&meta_path, metadata).map_err(|e| RecollfoxError::queue_write(&meta_path, e))?;

        let content_path = self.queue_dir.join(&key);
        let content = render_document(entry);
        fs::write(&content_path, content)
            .map_err(|e| RecollfoxError::queue_write(&content_path, e))?;

        tracing::trace!("Published {} as {}", entry.url, key);
        Ok(true)
    }
}

/// Deterministic content key for a URL.
///
/// Lowercase hex of the first 16 bytes of SHA-256 over the URL bytes.
/// Depends on the URL alone so the key is stable across re-exports of
/// the same page with a changed title or visit time.
#[must_use]
pub fn content_key(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut key = String::with_capacity(32);
    for byte in &digest[..16] {
        key.push_str(&format!("{byte:02x}"));
    }
    key
}

/// Render the HTML content document for an entry.
fn render_document(entry: &HistoryEntry) -> String {
    let t = escape_html(&entry.title);
    let d = escape_html(&entry.description);
    let u = escape_html(&entry.url);
    format!(
        "<html><head><meta charset=\"utf-8\"><title>{t}</title></head>\
         <body><h1>{t}</h1><p>{d}</p><a href=\"{u}\">{u}</a></body></html>\n"
    )
}

/// Escape text for interpolation into HTML markup and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
