//! Client configuration for the hosted document store and session restore.
//!
//! The browser bundle has no process environment, so values are baked in at
//! build time through `option_env!`. Parsing goes through [`AppConfig::from_lookup`]
//! so tests can feed arbitrary key/value sources.

pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE_ID: &str = "(default)";
pub const DEFAULT_SESSION_KEY: &str = "attendsync_session";

const PROJECT_ID_VAR: &str = "ATTENDSYNC_FIREBASE_PROJECT_ID";
const DATABASE_VAR: &str = "ATTENDSYNC_FIRESTORE_DATABASE";
const BASE_URL_VAR: &str = "ATTENDSYNC_FIRESTORE_BASE_URL";
const SESSION_KEY_VAR: &str = "ATTENDSYNC_SESSION_KEY";

/// Error returned when the client configuration is incomplete or malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required key has no value.
    #[error("missing config value: {var} not set")]
    Missing { var: String },
    /// A key is present but its value is unusable.
    #[error("invalid config value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub project_id: String,
    pub database_id: String,
    pub api_base_url: String,
    pub session_storage_key: String,
}

impl AppConfig {
    /// Build typed config from an arbitrary key lookup.
    ///
    /// Required:
    /// - `ATTENDSYNC_FIREBASE_PROJECT_ID`
    ///
    /// Optional:
    /// - `ATTENDSYNC_FIRESTORE_DATABASE`: default `(default)`
    /// - `ATTENDSYNC_FIRESTORE_BASE_URL`: default Firestore REST v1 endpoint
    /// - `ATTENDSYNC_SESSION_KEY`: `localStorage` key of the persisted auth session
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the project id is missing or a value is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_id = lookup(PROJECT_ID_VAR)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::Missing { var: PROJECT_ID_VAR.to_owned() })?;
        if project_id.contains('/') {
            return Err(ConfigError::Invalid {
                var: PROJECT_ID_VAR.to_owned(),
                reason: "must not contain '/'".to_owned(),
            });
        }

        let database_id = optional(&lookup, DATABASE_VAR, DEFAULT_DATABASE_ID)?;
        let api_base_url = optional(&lookup, BASE_URL_VAR, DEFAULT_FIRESTORE_BASE_URL)?
            .trim_end_matches('/')
            .to_owned();
        let session_storage_key = optional(&lookup, SESSION_KEY_VAR, DEFAULT_SESSION_KEY)?;

        Ok(Self { project_id, database_id, api_base_url, session_storage_key })
    }

    /// Build config from values captured when the bundle was compiled.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }

    /// Root URL for document reads, e.g. `.../projects/p/databases/(default)/documents`.
    pub fn documents_url(&self) -> String {
        format!("{}/projects/{}/databases/{}/documents", self.api_base_url, self.project_id, self.database_id)
    }
}

/// Configuration handed to components through context.
///
/// An incomplete store config is kept as its error so the app can still boot,
/// restore the session, and route the user to `/login` with a readable failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub config: Result<AppConfig, ConfigError>,
    pub session_key: String,
}

impl AppSettings {
    /// Resolve settings from a key lookup.
    ///
    /// The session key is read on its own so a broken store config still
    /// restores the session from the configured `localStorage` key.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = AppConfig::from_lookup(&lookup);
        let session_key = match &config {
            Ok(config) => config.session_storage_key.clone(),
            Err(_) => optional(&lookup, SESSION_KEY_VAR, DEFAULT_SESSION_KEY).unwrap_or_else(|e| {
                leptos::logging::warn!("{e}; using {DEFAULT_SESSION_KEY}");
                DEFAULT_SESSION_KEY.to_owned()
            }),
        };
        Self { config, session_key }
    }

    pub fn load() -> Self {
        let settings = Self::from_lookup(build_env);
        if let Err(e) = &settings.config {
            leptos::logging::warn!("document store not configured: {e}");
        }
        settings
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        PROJECT_ID_VAR => option_env!("ATTENDSYNC_FIREBASE_PROJECT_ID"),
        DATABASE_VAR => option_env!("ATTENDSYNC_FIRESTORE_DATABASE"),
        BASE_URL_VAR => option_env!("ATTENDSYNC_FIRESTORE_BASE_URL"),
        SESSION_KEY_VAR => option_env!("ATTENDSYNC_SESSION_KEY"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn optional<F>(lookup: &F, var: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default.to_owned()),
        Some(raw) if raw.trim().is_empty() => {
            Err(ConfigError::Invalid { var: var.to_owned(), reason: "value is blank".to_owned() })
        }
        Some(raw) => Ok(raw.trim().to_owned()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
