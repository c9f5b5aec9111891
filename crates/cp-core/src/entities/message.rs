use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One message in a plan's shared thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub plan_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_flagged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flagged_reason: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Message {
    /// Counted as unread on the dashboard: neither deleted nor flagged.
    #[must_use]
    pub const fn is_unread(&self) -> bool {
        !self.is_deleted && !self.is_flagged
    }
}
