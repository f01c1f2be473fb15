//! Login landing page.
//!
//! Sign-in itself happens in the auth provider's hosted flow, which persists
//! the session in `localStorage`. This page re-reads that session and hands the
//! visitor back to the guarded shell.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AppSettings;
use crate::net::session::restore_identity;
use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let settings = expect_context::<AppSettings>();
    let navigate = use_navigate();
    let info = RwSignal::new(String::new());

    let on_continue = move |_| {
        match restore_identity(&settings.session_key) {
            Some(identity) => {
                auth.set(AuthState::settled(Some(identity)));
                navigate("/", NavigateOptions::default());
            }
            None => info.set("No active session found. Sign in with your institution account first.".to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"AttendSync"</h1>
                <p class="login-card__subtitle">"Attendance tracking for classes and sections"</p>
                <button class="login-button" on:click=on_continue>
                    "Continue"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
