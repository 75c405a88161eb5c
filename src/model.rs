//! Data types for `recollfox`.

use serde::Serialize;

/// One browsing-history event read from the places database.
///
/// Records are totally ordered by `last_visit_date` (Firefox
/// microseconds since the Unix epoch). Ties are broken arbitrarily by
/// the reader; correctness does not depend on timestamp uniqueness
/// because the watermark filter is strict `>` and publication is
/// idempotent per URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Visited resource. Empty URLs are unpublishable and skipped.
    pub url: String,
    /// Page title, may be empty.
    pub title: String,
    /// Visit timestamp, also the watermark unit.
    pub last_visit_date: i64,
    /// Page description (from metadata), may be empty.
    pub description: String,
}
