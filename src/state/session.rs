#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Session state: the identity slot.
///
/// The user is derived from the stored credential, never persisted on its
/// own. Components read it through the context signal; the login, signup,
/// password-change, and logout flows are the only writers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    /// Rebuild the session from the stored credential at startup.
    pub fn restore() -> Self {
        Self {
            user: crate::net::auth::current_user(),
        }
    }

    /// Whether a signed-in identity is present. This is the route guard's
    /// whole decision.
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Adopt a fresh identity after login, signup, or password change.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Drop the identity. Idempotent.
    pub fn sign_out(&mut self) {
        self.user = None;
    }
}
