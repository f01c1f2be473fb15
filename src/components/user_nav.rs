//! Header identity summary with a sign-out action.
//!
//! Signing out only clears the session; the layout's session gate performs the
//! redirect to `/login`.

use leptos::prelude::*;

use crate::config::AppSettings;
use crate::net::session::clear_session;
use crate::net::types::UserRole;
use crate::state::auth::AuthState;

#[component]
pub fn UserNav(role: Signal<Option<UserRole>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let settings = expect_context::<AppSettings>();

    let display_name = move || {
        auth.get()
            .identity
            .and_then(|identity| identity.display_name.or(identity.email))
            .unwrap_or_else(|| "Signed in".to_owned())
    };
    let role_label = move || role.get().map(UserRole::label).unwrap_or_default();

    let on_sign_out = move |_| {
        clear_session(&settings.session_key);
        auth.set(AuthState::settled(None));
    };

    view! {
        <div class="user-nav">
            <span class="user-nav__name">{display_name}</span>
            <span class="user-nav__role">{role_label}</span>
            <button class="user-nav__sign-out" on:click=on_sign_out>"Sign out"</button>
        </div>
    }
}
