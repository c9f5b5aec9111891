//! Serde helpers for calendar dates that the API may send either as a bare
//! date (`2020-05-01`) or as a full RFC 3339 timestamp
//! (`2020-05-01T00:00:00.000Z`). Only the date part is kept.
//!
//! Dates always serialize as `YYYY-MM-DD`.
//!
//! # Example
//! ```ignore
//! use cp_core::date_serde;
//! use chrono::NaiveDate;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     #[serde(with = "date_serde::flexible")]
//!     pub birth_date: NaiveDate,
//!
//!     #[serde(default, with = "date_serde::flexible_option")]
//!     pub end_date: Option<NaiveDate>,
//! }
//! ```

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date or timestamp string into its calendar date.
///
/// # Errors
///
/// Returns the chrono parse error message when neither form matches.
pub fn parse_flexible(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.date_naive())
        .map_err(|e| format!("invalid date '{raw}': {e}"))
}

pub mod flexible {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse_flexible(&raw).map_err(serde::de::Error::custom)
    }
}

/// `Option<NaiveDate>` variant. Null, missing, and empty strings decode as `None`.
pub mod flexible_option {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_some(&d.format(DATE_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_flexible(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Dated {
        #[serde(with = "flexible")]
        day: NaiveDate,
        #[serde(default, with = "flexible_option")]
        until: Option<NaiveDate>,
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_bare_date() {
        let v: Dated = serde_json::from_str(r#"{"day":"2020-05-01"}"#).unwrap();
        assert_eq!(v.day, ymd(2020, 5, 1));
        assert_eq!(v.until, None);
    }

    #[test]
    fn accepts_timestamp_and_keeps_date_part() {
        let v: Dated =
            serde_json::from_str(r#"{"day":"2025-11-04T17:44:04.518Z","until":null}"#).unwrap();
        assert_eq!(v.day, ymd(2025, 11, 4));
    }

    #[test]
    fn empty_optional_is_none() {
        let v: Dated = serde_json::from_str(r#"{"day":"2020-05-01","until":""}"#).unwrap();
        assert_eq!(v.until, None);
    }

    #[test]
    fn rejects_garbage() {
        let result: Result<Dated, _> = serde_json::from_str(r#"{"day":"next tuesday"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_as_plain_date() {
        let v = Dated {
            day: ymd(2024, 1, 9),
            until: Some(ymd(2024, 2, 1)),
        };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["day"], "2024-01-09");
        assert_eq!(json["until"], "2024-02-01");
    }
}
