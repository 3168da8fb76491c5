//! Session gate: the sign-in form and the authenticated flag.
//!
//! The gate is a two-state machine. `Anonymous` is initial; a submit whose
//! credentials verify moves it to `Authenticated`, which is terminal for the
//! page lifetime. A failed submit stays `Anonymous` and replaces the error
//! message.
//!
//! Credentials are checked through [`CredentialVerifier`] so the page never
//! touches the roster directly.

use std::fmt;

use crate::constants::LOGIN_ERROR;
use crate::models::User;

/// Checks a credential pair.
pub trait CredentialVerifier: Send + Sync {
    /// Returns `true` when `(id, password)` is accepted.
    fn verify(&self, id: &str, password: &str) -> bool;
}

/// Verifies against a loaded user roster by exact, case-sensitive equality.
///
/// Plaintext comparison against static data: not a security boundary.
#[derive(Debug, Clone, Default)]
pub struct RosterVerifier {
    users: Vec<User>,
}

impl RosterVerifier {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl CredentialVerifier for RosterVerifier {
    fn verify(&self, id: &str, password: &str) -> bool {
        self.users
            .iter()
            .any(|u| u.user_id == id && u.user_password == password)
    }
}

/// Gate state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated,
}

/// Sign-in form inputs plus gate state.
#[derive(Clone, Default)]
pub struct SessionGate {
    id: String,
    password: String,
    state: SessionState,
    error_message: Option<String>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Submit the current inputs.
    ///
    /// Once authenticated, further submits are ignored.
    pub fn submit(&mut self, verifier: &dyn CredentialVerifier) -> SessionState {
        if self.state == SessionState::Authenticated {
            return self.state;
        }

        if verifier.verify(&self.id, &self.password) {
            tracing::debug!(id = %self.id, "sign-in accepted");
            self.state = SessionState::Authenticated;
        } else {
            tracing::debug!(id = %self.id, "sign-in rejected");
            self.error_message = Some(LOGIN_ERROR.to_string());
        }
        self.state
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Length of the password input, for masked display.
    pub fn password_len(&self) -> usize {
        self.password.chars().count()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

impl fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGate")
            .field("id", &self.id)
            .field("password", &"[REDACTED]")
            .field("state", &self.state)
            .field("error_message", &self.error_message)
            .finish()
    }
}
