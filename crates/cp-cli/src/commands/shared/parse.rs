use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use cp_core::date_serde::parse_flexible;

const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parse a `YYYY-MM-DD` (or RFC 3339) argument.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    parse_flexible(raw).map_err(|_| anyhow::anyhow!("invalid {field} '{raw}': expected YYYY-MM-DD"))
}

/// Parse a timestamp argument: RFC 3339, or `YYYY-MM-DD HH:MM` taken as UTC.
pub fn parse_timestamp(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            anyhow::anyhow!("invalid {field} '{raw}': expected RFC 3339 or YYYY-MM-DD HH:MM")
        })
}
