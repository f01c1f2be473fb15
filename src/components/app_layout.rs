//! Guarded shell wrapped around every authenticated page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session gate runs first and sends signed-out visitors to `/login`. Once
//! an identity is present, role resolution reads the rosters and redirects to
//! the role's landing route. The connectivity badge runs independently. Page
//! content renders only after a role has been resolved.
//!
//! TRADE-OFFS
//! ==========
//! The role is re-derived on every mount with no cache, so a reload always
//! reflects current roster membership at the cost of two reads.

#[cfg(test)]
#[path = "app_layout_test.rs"]
mod app_layout_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::network_badge::NetworkBadge;
use crate::components::user_nav::UserNav;
use crate::config::AppSettings;
use crate::net::types::{Identity, UserRole};
use crate::state::auth::AuthState;
use crate::state::role::RoleState;
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;
use crate::util::error_channel::ErrorChannel;
use crate::util::lifecycle::{Lifecycle, Ticket};
use crate::util::network_status::use_network_status;

/// What the layout does with role state after an auth change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionStep {
    /// Signed in under a uid not yet resolved: start a fresh pass.
    Start(String),
    /// Same uid as the last pass; keep its result.
    Skip,
    /// Signed out after loading finished: nothing to resolve, stop waiting.
    Settle,
    /// Session restore still running.
    Pending,
}

/// Decide the next step from the current auth state and the uid of the last pass.
pub fn next_step(auth: &AuthState, resolved_uid: Option<&str>) -> ResolutionStep {
    match auth.uid() {
        Some(uid) if resolved_uid == Some(uid) => ResolutionStep::Skip,
        Some(uid) => ResolutionStep::Start(uid.to_owned()),
        None if auth.loading => ResolutionStep::Pending,
        None => ResolutionStep::Settle,
    }
}

/// Role state to store once a pass finishes; `None` when the pass was superseded.
pub fn finished_state(role: Option<UserRole>, ticket: &Ticket) -> Option<RoleState> {
    ticket.is_live().then_some(RoleState { role, resolving: false })
}

/// Everything a resolution pass needs once it leaves the reactive setup scope.
#[derive(Clone)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct ResolverDeps {
    settings: AppSettings,
    errors: ErrorChannel,
    toasts: RwSignal<ToastState>,
    role_state: RwSignal<RoleState>,
    pathname: Memo<String>,
    navigate: Rc<dyn Fn(&str)>,
}

/// Layout for guarded routes. Shows a loading placeholder until a role is known.
#[component]
pub fn AppLayout(#[prop(optional)] children: Option<ChildrenFn>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let role_state = RwSignal::new(RoleState::default());
    let online = use_network_status();

    install_unauth_redirect(auth, navigate.clone());

    let deps = ResolverDeps {
        settings: expect_context::<AppSettings>(),
        errors: expect_context::<ErrorChannel>(),
        toasts: expect_context::<RwSignal<ToastState>>(),
        role_state,
        pathname: use_location().pathname,
        navigate: Rc::new(move |target: &str| navigate(target, NavigateOptions::default())),
    };

    let lifecycle = Lifecycle::new();
    let lifecycle_cleanup = lifecycle.clone();
    on_cleanup(move || lifecycle_cleanup.invalidate());

    // Re-run only when the signed-in uid changes.
    Effect::new(move |resolved_uid: Option<Option<String>>| {
        let state = auth.get();
        match next_step(&state, resolved_uid.flatten().as_deref()) {
            ResolutionStep::Start(uid) => {
                let ticket = lifecycle.begin();
                role_state.set(RoleState::default());
                if let Some(identity) = state.identity {
                    spawn_resolution(deps.clone(), identity, ticket);
                }
                Some(uid)
            }
            ResolutionStep::Skip => state.uid().map(str::to_owned),
            ResolutionStep::Settle => {
                lifecycle.invalidate();
                role_state.set(RoleState { role: None, resolving: false });
                None
            }
            ResolutionStep::Pending => {
                lifecycle.invalidate();
                None
            }
        }
    });

    let ready = move || role_state.get().is_ready(&auth.get());
    let role = Signal::derive(move || role_state.get().role);

    view! {
        <Show
            when=ready
            fallback=|| view! {
                <div class="layout-loading">
                    <p>"Loading..."</p>
                </div>
            }
        >
            <div class="app-shell">
                <header class="app-header">
                    <span class="app-header__brand">"AttendSync"</span>
                    <div class="app-header__actions">
                        <NetworkBadge online/>
                        <UserNav role/>
                    </div>
                </header>
                <main class="app-main">
                    {children.as_ref().map(|children| children())}
                </main>
            </div>
        </Show>
    }
}

fn spawn_resolution(deps: ResolverDeps, identity: Identity, ticket: Ticket) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::store::RestDocumentStore;
        use crate::util::role_resolver::{Effects, run_role_resolution};

        let store = RestDocumentStore::from_config(&deps.settings.config, identity.id_token.clone());
        let current_path = || deps.pathname.get_untracked();
        let effects = Effects {
            navigate: deps.navigate.as_ref(),
            current_path: &current_path,
            notifier: &deps.toasts,
            errors: &deps.errors,
        };
        let role = run_role_resolution(&store, &identity.uid, &ticket, &effects).await;
        if let Some(state) = finished_state(role, &ticket) {
            deps.role_state.set(state);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (deps, identity, ticket);
    }
}
