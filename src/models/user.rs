//! User records loaded from `users.json`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A sign-in identity. Compared in plaintext; not a security boundary.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub user_password: String,
}

impl User {
    pub fn new(user_id: impl Into<String>, user_password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_password: user_password.into(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("user_id", &self.user_id)
            .field("user_password", &"[REDACTED]")
            .finish()
    }
}

/// Top-level shape of `users.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersDocument {
    pub users: Vec<User>,
}
