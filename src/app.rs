//! Root application component with routing and context providers.
//!
//! This is the composition root: it restores the session, creates the shared
//! state signals and the error channel, and subscribes the app-level error
//! listener before any guarded route mounts.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::config::AppSettings;
use crate::net::session::restore_identity;
use crate::pages::dashboard::{
    AdminDashboardPage, DashboardShell, FacultyDashboardPage, HomePage, StudentDashboardPage,
};
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::error_channel::{ErrorChannel, event_log_line};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = AppSettings::load();
    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    let errors = ErrorChannel::new();

    // Permission errors are reported, not shown; the resolver already redirects.
    let listener = errors.subscribe(|event| leptos::logging::error!("{}", event_log_line(event)));
    on_cleanup(move || drop(listener));

    // Session restore needs `localStorage`, so it runs after mount.
    let session_key = settings.session_key.clone();
    Effect::new(move || {
        let identity = restore_identity(&session_key);
        auth.set(AuthState::settled(identity));
    });

    provide_context(settings);
    provide_context(auth);
    provide_context(toasts);
    provide_context(errors);

    view! {
        <Stylesheet id="leptos" href="/pkg/attendsync.css"/>
        <Title text="AttendSync"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardShell>
                    <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                    <Route path=StaticSegment("faculty") view=FacultyDashboardPage/>
                    <Route path=StaticSegment("student") view=StudentDashboardPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <Toaster/>
    }
}
