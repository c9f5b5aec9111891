use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled custody visit under a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Visit {
    pub id: String,
    pub plan_id: String,
    pub child_id: String,
    pub parent_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Visit {
    #[must_use]
    pub fn starts_after(&self, now: DateTime<Utc>) -> bool {
        self.start_time > now
    }
}
