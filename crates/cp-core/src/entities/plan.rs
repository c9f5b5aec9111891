use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::date_serde;
use crate::entities::Child;
use crate::enums::{InviteStatus, PlanStatus};

/// A shared custody arrangement linking parents and children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParentingPlan {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        with = "date_serde::flexible_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "date_serde::flexible_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    pub status: PlanStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invites: Option<Vec<PlanInvite>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Child>>,
}

impl ParentingPlan {
    /// Invites known for this plan (empty when the server omitted them).
    #[must_use]
    pub fn invites(&self) -> &[PlanInvite] {
        self.invites.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn find_invite(&self, invite_id: &str) -> Option<&PlanInvite> {
        self.invites().iter().find(|invite| invite.id == invite_id)
    }

    /// Invites still waiting on their recipient.
    pub fn pending_invites(&self) -> impl Iterator<Item = &PlanInvite> {
        self.invites()
            .iter()
            .filter(|invite| invite.status == InviteStatus::Pending)
    }
}

/// An outstanding (or accepted) request for another parent to join a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanInvite {
    pub id: String,
    pub plan_id: String,
    pub email: String,
    pub status: InviteStatus,
    pub created_at: DateTime<Utc>,
}
