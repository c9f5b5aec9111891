//! Dashboard tallies computed from fetched records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Message, Visit};

/// Counts shown by `coparent dashboard`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub children: usize,
    pub plans: usize,
    pub upcoming_visits: usize,
    pub unread_messages: usize,
}

impl DashboardSummary {
    /// Build a summary from already-fetched collections.
    ///
    /// A visit is upcoming when it starts strictly after `now`; a message is
    /// unread when it is neither deleted nor flagged.
    #[must_use]
    pub fn tally<'a>(
        children: usize,
        plans: usize,
        visits: impl IntoIterator<Item = &'a Visit>,
        messages: impl IntoIterator<Item = &'a Message>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            children,
            plans,
            upcoming_visits: visits.into_iter().filter(|v| v.starts_after(now)).count(),
            unread_messages: messages.into_iter().filter(|m| m.is_unread()).count(),
        }
    }
}
