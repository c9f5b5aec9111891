use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_serde;

/// A child record owned by one parent account.
///
/// Decodes either `first_name`/`birth_date` or `full_name`/`date_of_birth`.
/// When a record carries both spellings the `first_name`/`birth_date` value
/// wins. Always encodes as `first_name`/`birth_date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "ChildWire")]
pub struct Child {
    pub id: String,
    pub first_name: String,
    #[serde(serialize_with = "date_serde::flexible::serialize")]
    pub birth_date: NaiveDate,
    pub parent_id: String,
}

#[derive(Deserialize)]
struct ChildWire {
    id: String,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default, with = "date_serde::flexible_option")]
    birth_date: Option<NaiveDate>,
    #[serde(default, with = "date_serde::flexible_option")]
    date_of_birth: Option<NaiveDate>,
    parent_id: String,
}

impl TryFrom<ChildWire> for Child {
    type Error = String;

    fn try_from(wire: ChildWire) -> Result<Self, Self::Error> {
        let first_name = wire
            .first_name
            .or(wire.full_name)
            .ok_or_else(|| String::from("missing field `first_name`"))?;
        let birth_date = wire
            .birth_date
            .or(wire.date_of_birth)
            .ok_or_else(|| String::from("missing field `birth_date`"))?;
        Ok(Self {
            id: wire.id,
            first_name,
            birth_date,
            parent_id: wire.parent_id,
        })
    }
}
