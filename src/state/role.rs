//! Layout-local role state.
//!
//! The role is derived on every mount and never persisted; this struct only
//! tracks the latest resolution result and whether one is in flight.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use crate::net::types::UserRole;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleState {
    pub role: Option<UserRole>,
    /// True until the current resolution pass has finished.
    pub resolving: bool,
}

impl Default for RoleState {
    fn default() -> Self {
        Self { role: None, resolving: true }
    }
}

impl RoleState {
    /// Whether the layout may render page content instead of the loading placeholder.
    pub fn is_ready(&self, auth: &AuthState) -> bool {
        !self.resolving && !auth.loading && auth.identity.is_some() && self.role.is_some()
    }
}
