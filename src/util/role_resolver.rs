//! Role resolution for a signed-in identity.
//!
//! ARCHITECTURE
//! ============
//! [`resolve_role`] performs the two ordered roster reads and classifies the
//! outcome as a [`Resolution`]. [`apply_resolution`] turns that outcome into
//! navigation, notifications, and error-channel events through injected
//! collaborators. Both halves honor a lifecycle [`Ticket`], so a layout torn
//! down mid-lookup never receives writes.
//!
//! ERROR HANDLING
//! ==============
//! Permission-denied on the admin roster is the normal case for non-admins and
//! is swallowed. Every other failure ends at `/login`, either with a toast or
//! with a structured event for the app-level listener.

#[cfg(test)]
#[path = "role_resolver_test.rs"]
mod role_resolver_test;

use serde_json::Value;

use crate::net::store::{DocRef, Document, DocumentStore, StoreError};
use crate::net::types::{UnknownRole, UserRole};
use crate::state::toast::{Notice, Notifier};
use crate::util::auth::LOGIN_ROUTE;
use crate::util::error_channel::{ChannelEvent, ErrorSink, PermissionError};
use crate::util::lifecycle::Ticket;

/// Collection whose membership alone grants the admin role.
pub const ADMIN_ROSTER: &str = "roles_admin";
/// Collection holding every other user's profile and `role` field.
pub const USER_ROSTER: &str = "users";
pub const ROLE_FIELD: &str = "role";

pub const ACCESS_DENIED_TITLE: &str = "Access Denied";
pub const ACCESS_DENIED_DESCRIPTION: &str = "Your user role could not be determined.";
pub const FETCH_FAILED_TITLE: &str = "Error fetching user data";
pub const FETCH_FAILED_DESCRIPTION: &str = "Could not fetch user data.";

/// Outcome of one resolution pass.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Resolved(UserRole),
    /// The identity has no usable record in either roster.
    Undetermined,
    /// The general roster read was rejected by security rules.
    PermissionDenied(PermissionError),
    /// The general roster read failed for any other reason.
    Failed(StoreError),
    /// The owning view went away before the pass finished.
    Cancelled,
}

/// Collaborators used to act on a [`Resolution`].
pub struct Effects<'a> {
    pub navigate: &'a dyn Fn(&str),
    /// Current route path, read at the moment a redirect is considered.
    pub current_path: &'a dyn Fn() -> String,
    pub notifier: &'a dyn Notifier,
    pub errors: &'a dyn ErrorSink,
}

/// Read the `role` field of a general-roster document.
///
/// Absent or falsy values (`null`, `""`, `false`, `0`) default to student.
///
/// # Errors
///
/// Returns [`UnknownRole`] for any other value that is not a known role name.
pub fn role_from_document(doc: &Document) -> Result<UserRole, UnknownRole> {
    match doc.get(ROLE_FIELD) {
        None | Some(Value::Null) => Ok(UserRole::Student),
        Some(Value::String(s)) if s.is_empty() => Ok(UserRole::Student),
        Some(Value::Bool(false)) => Ok(UserRole::Student),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(UserRole::Student),
        Some(Value::String(s)) => s.parse(),
        Some(other) => Err(UnknownRole(other.to_string())),
    }
}

/// Classify the identity by reading the admin roster, then the general roster.
pub async fn resolve_role<S>(store: &S, uid: &str, ticket: &Ticket) -> Resolution
where
    S: DocumentStore,
{
    let admin_doc = DocRef::new(ADMIN_ROSTER, uid);
    match store.get(&admin_doc).await {
        Ok(Some(_)) => return Resolution::Resolved(UserRole::Admin),
        Ok(None) => {}
        Err(e) if e.is_permission_denied() => {}
        Err(e) => leptos::logging::error!("admin roster check failed for {uid}: {e}"),
    }
    if !ticket.is_live() {
        return Resolution::Cancelled;
    }

    let user_doc = DocRef::new(USER_ROSTER, uid);
    match store.get(&user_doc).await {
        Ok(Some(doc)) => match role_from_document(&doc) {
            Ok(role) => Resolution::Resolved(role),
            Err(e) => {
                leptos::logging::warn!("{}: {e}", user_doc.path());
                Resolution::Undetermined
            }
        },
        Ok(None) => Resolution::Undetermined,
        Err(e) if e.is_permission_denied() => Resolution::PermissionDenied(PermissionError::get(user_doc.path())),
        Err(e) => Resolution::Failed(e),
    }
}

/// Act on a resolution. Returns the role to store, if any.
///
/// A stale ticket turns this into a no-op.
pub fn apply_resolution(resolution: Resolution, ticket: &Ticket, effects: &Effects<'_>) -> Option<UserRole> {
    if !ticket.is_live() {
        return None;
    }
    match resolution {
        Resolution::Resolved(role) => {
            let target = role.landing_route();
            if (effects.current_path)() != target {
                (effects.navigate)(target);
            }
            Some(role)
        }
        Resolution::Undetermined => {
            effects.notifier.notify(Notice::destructive(ACCESS_DENIED_TITLE, ACCESS_DENIED_DESCRIPTION));
            (effects.navigate)(LOGIN_ROUTE);
            None
        }
        Resolution::PermissionDenied(err) => {
            effects.errors.publish(ChannelEvent::PermissionError(err));
            (effects.navigate)(LOGIN_ROUTE);
            None
        }
        Resolution::Failed(e) => {
            leptos::logging::error!("user roster read failed ({}): {e}", e.code());
            effects.notifier.notify(Notice::destructive(FETCH_FAILED_TITLE, FETCH_FAILED_DESCRIPTION));
            (effects.navigate)(LOGIN_ROUTE);
            None
        }
        Resolution::Cancelled => None,
    }
}

/// Full pass: resolve, then apply if the ticket is still live.
pub async fn run_role_resolution<S>(store: &S, uid: &str, ticket: &Ticket, effects: &Effects<'_>) -> Option<UserRole>
where
    S: DocumentStore,
{
    let resolution = resolve_role(store, uid, ticket).await;
    apply_resolution(resolution, ticket, effects)
}
