//! Local copy of the user's plans, patched optimistically as the user
//! creates plans, sends invites, and accepts them.

use cp_core::entities::{ParentingPlan, PlanInvite};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::services::plans;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanBoard {
    plans: Vec<ParentingPlan>,
}

impl PlanBoard {
    #[must_use]
    pub const fn new(plans: Vec<ParentingPlan>) -> Self {
        Self { plans }
    }

    /// Fetch `/plans` into a fresh board.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request helper.
    pub async fn load(client: &ApiClient) -> Result<Self, ApiError> {
        Ok(Self::new(plans::list(client).await?))
    }

    #[must_use]
    pub fn plans(&self) -> &[ParentingPlan] {
        &self.plans
    }

    #[must_use]
    pub fn into_plans(self) -> Vec<ParentingPlan> {
        self.plans
    }

    #[must_use]
    pub fn plan(&self, plan_id: &str) -> Option<&ParentingPlan> {
        self.plans.iter().find(|plan| plan.id == plan_id)
    }

    fn plan_mut(&mut self, plan_id: &str) -> Option<&mut ParentingPlan> {
        self.plans.iter_mut().find(|plan| plan.id == plan_id)
    }

    /// Append a newly created plan, or replace the copy with the same id.
    pub fn insert_plan(&mut self, plan: ParentingPlan) {
        match self.plan_mut(&plan.id) {
            Some(existing) => *existing = plan,
            None => self.plans.push(plan),
        }
    }

    #[must_use]
    pub fn find_invite(&self, invite_id: &str) -> Option<&PlanInvite> {
        self.plans
            .iter()
            .find_map(|plan| plan.find_invite(invite_id))
    }

    /// Append an invite to its plan. Duplicates are kept as-is.
    ///
    /// Returns `false` when the invite's plan is not on the board.
    pub fn record_invite(&mut self, invite: PlanInvite) -> bool {
        let Some(plan) = self.plan_mut(&invite.plan_id) else {
            return false;
        };
        plan.invites.get_or_insert_with(Vec::new).push(invite);
        true
    }

    /// Replace the stored copy of an invite with the server's accepted copy.
    ///
    /// Returns `false` when the invite's plan is not on the board.
    pub fn mark_accepted(&mut self, invite: PlanInvite) -> bool {
        let Some(plan) = self.plan_mut(&invite.plan_id) else {
            return false;
        };
        let invites = plan.invites.get_or_insert_with(Vec::new);
        match invites.iter_mut().find(|existing| existing.id == invite.id) {
            Some(existing) => *existing = invite,
            None => invites.push(invite),
        }
        true
    }
}
