//! Human-readable date rendering for CLI output.
//!
//! Timestamps render in UTC. Unparseable input renders as an empty string.

use chrono::{DateTime, NaiveDate, Utc};

use crate::date_serde::parse_flexible;

const TIMESTAMP_FORMAT: &str = "%b %d, %Y, %H:%M";
const DATE_FORMAT: &str = "%b %d, %Y";

/// `"2025-11-04T17:44:04.518Z"` → `"Nov 04, 2025, 17:44"`.
///
/// String form of [`render_timestamp`]; a bare date renders at midnight.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw.trim()) {
        return render_timestamp(ts.with_timezone(&Utc));
    }
    parse_flexible(raw)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| render_timestamp(naive.and_utc()))
        .unwrap_or_default()
}

/// `"2025-11-04"` (or any RFC 3339 timestamp) → `"Nov 04, 2025"`.
///
/// String form of [`render_date`].
#[must_use]
pub fn format_date(raw: &str) -> String {
    parse_flexible(raw)
        .map(render_date)
        .unwrap_or_default()
}

#[must_use]
pub fn render_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[must_use]
pub fn render_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
