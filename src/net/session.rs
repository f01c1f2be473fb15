//! Restore the auth provider's persisted browser session.
//!
//! The provider's web SDK keeps the signed-in user as JSON in `localStorage`.
//! The layout only needs the user id and the current ID token, so this module
//! reads that record directly instead of booting the whole SDK.
//!
//! TRADE-OFFS
//! ==========
//! An expired token is dropped rather than refreshed. The identity survives,
//! so the store read fails as permission-denied and the user lands on `/login`
//! to sign in again.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Deserialize;

use super::types::Identity;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    uid: String,
    email: Option<String>,
    display_name: Option<String>,
    sts_token_manager: Option<TokenManager>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenManager {
    access_token: Option<String>,
    /// Milliseconds since the Unix epoch.
    expiration_time: Option<f64>,
}

/// Parse a persisted session record. Returns `None` for malformed records or a blank uid.
pub fn parse_session(raw: &str, now_ms: f64) -> Option<Identity> {
    let session: PersistedSession = serde_json::from_str(raw).ok()?;
    if session.uid.trim().is_empty() {
        return None;
    }
    let id_token = session.sts_token_manager.and_then(|tm| match (tm.access_token, tm.expiration_time) {
        (Some(token), Some(expires)) if expires > now_ms => Some(token),
        (Some(token), None) => Some(token),
        _ => None,
    });
    Some(Identity {
        uid: session.uid,
        email: session.email,
        display_name: session.display_name,
        id_token,
    })
}

/// Read the signed-in identity from `localStorage`.
/// Returns `None` when signed out or on the server.
pub fn restore_identity(storage_key: &str) -> Option<Identity> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(storage_key).ok()??;
        let identity = parse_session(&raw, js_sys::Date::now());
        if identity.is_none() {
            leptos::logging::warn!("ignoring unreadable session record under {storage_key}");
        }
        identity
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = storage_key;
        None
    }
}

/// Drop the persisted session so the next load starts signed out.
pub fn clear_session(storage_key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(storage_key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = storage_key;
    }
}
