//! Role landing pages rendered inside the guarded shell.
//!
//! The CRUD views behind each dashboard live elsewhere; these pages only name
//! the role so the landing routes resolve.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::app_layout::AppLayout;
use crate::net::types::UserRole;

fn dashboard_heading(role: UserRole) -> String {
    format!("{} Dashboard", role.label())
}

/// Parent route view: every `/dashboard/*` page renders inside the layout.
#[component]
pub fn DashboardShell() -> impl IntoView {
    view! {
        <AppLayout>
            <Outlet/>
        </AppLayout>
    }
}

/// `/` has no content of its own; the layout redirects to the role's landing route.
#[component]
pub fn HomePage() -> impl IntoView {
    view! { <AppLayout/> }
}

#[component]
fn RoleDashboard(role: UserRole) -> impl IntoView {
    view! {
        <section class="dashboard" data-role=role.as_str()>
            <h2 class="dashboard__title">{dashboard_heading(role)}</h2>
        </section>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! { <RoleDashboard role=UserRole::Admin/> }
}

#[component]
pub fn FacultyDashboardPage() -> impl IntoView {
    view! { <RoleDashboard role=UserRole::Faculty/> }
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    view! { <RoleDashboard role=UserRole::Student/> }
}
