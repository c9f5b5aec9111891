//! Response envelopes returned by the API.
//!
//! Every collection and single-record response wraps its payload in a named
//! field. The field names are kept here so services and tests agree on them.

use serde::{Deserialize, Serialize};

use crate::entities::User;

/// Envelope field names, one per payload kind.
pub mod fields {
    pub const CHILDREN: &str = "children";
    pub const CHILD: &str = "child";
    pub const PLANS: &str = "plans";
    pub const PLAN: &str = "plan";
    pub const INVITE: &str = "invite";
    pub const VISITS: &str = "visits";
    pub const VISIT: &str = "visit";
    pub const MESSAGES: &str = "messages";
    pub const MESSAGE: &str = "message";
    pub const ENTRIES: &str = "entries";
    pub const ENTRY: &str = "entry";
}

/// Body of a successful `/auth/login` or `/users/register` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}
