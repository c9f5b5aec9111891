use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// An authenticated account as returned by `/auth/login` and `/users/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Whether `email` addresses this user (trimmed, case-insensitive).
    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(email.trim())
    }
}
