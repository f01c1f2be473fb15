//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the session gate and identity-aware components to coordinate login
//! redirects and role resolution. The layout only reads it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Identity;

/// Authentication state tracking the current identity and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts loading: nothing is known until the session has been restored.
    fn default() -> Self {
        Self { identity: None, loading: true }
    }
}

impl AuthState {
    /// Settled state after a restore attempt.
    pub fn settled(identity: Option<Identity>) -> Self {
        Self { identity, loading: false }
    }

    /// Identity id, when signed in.
    pub fn uid(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.uid.as_str())
    }
}
