//! Session gate shared by guarded routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies identical unauthenticated redirect behavior, and
//! role resolution only starts once the gate has let an identity through.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";

/// True when auth has finished loading and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.identity.is_none()
}

/// Redirect latch: fires once per signed-out stretch, re-arms when an identity appears.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionGate {
    redirected: bool,
}

impl SessionGate {
    /// Observe a new auth state; returns `true` when a login redirect should be issued now.
    pub fn observe(&mut self, state: &AuthState) -> bool {
        if !should_redirect_unauth(state) {
            if state.identity.is_some() {
                self.redirected = false;
            }
            return false;
        }
        if self.redirected {
            return false;
        }
        self.redirected = true;
        true
    }
}

/// Redirect to `/login` whenever auth has loaded and no identity is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let gate = StoredValue::new(SessionGate::default());
    Effect::new(move || {
        let state = auth.get();
        let fire = gate.try_update_value(|g| g.observe(&state)).unwrap_or(false);
        if fire {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
