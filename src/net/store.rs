//! Read-only access to the hosted document store.
//!
//! Client-side (hydrate): keyed reads over the Firestore REST v1 API via `gloo-net`.
//! Server-side (SSR): reads fail as `unavailable` since the store session only
//! exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Reads return `Ok(None)` for a missing document and reserve `Err` for
//! transport, permission, and decoding failures. [`StoreError::code`] exposes the
//! provider's string discriminator so callers can branch on `permission-denied`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde_json::{Map, Value};

use crate::config::{AppConfig, ConfigError};

/// Error returned by [`DocumentStore::get`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The caller lacks read access to the document (or has no valid credential).
    #[error("missing or insufficient permissions")]
    PermissionDenied,
    /// The store could not be reached or is not configured.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The store answered but the payload could not be decoded.
    #[error("malformed store response: {0}")]
    Malformed(String),
    /// Any other non-success response.
    #[error("store request failed: status {status}: {message}")]
    Other { status: u16, message: String },
}

impl StoreError {
    /// Provider-style error code (`permission-denied`, `unavailable`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "permission-denied",
            Self::Unavailable(_) => "unavailable",
            Self::Malformed(_) => "internal",
            Self::Other { .. } => "unknown",
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied)
    }
}

/// Address of one document: `{collection}/{id}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocRef {
    pub collection: String,
    pub id: String,
}

impl DocRef {
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self { collection: collection.into(), id: id.into() }
    }

    pub fn path(&self) -> String {
        format!("{}/{}", self.collection, self.id)
    }
}

/// A fetched document with its fields decoded to plain JSON values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Keyed document reads. The layout only ever reads; writes belong to page views.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    /// Fetch one document. `Ok(None)` means the document does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on permission, transport, or decoding failure.
    async fn get(&self, doc: &DocRef) -> Result<Option<Document>, StoreError>;
}

/// Document store backed by the Firestore REST API.
#[derive(Clone, Debug)]
pub struct RestDocumentStore {
    documents_url: Result<String, ConfigError>,
    id_token: Option<String>,
}

impl RestDocumentStore {
    pub fn new(config: &AppConfig, id_token: Option<String>) -> Self {
        Self { documents_url: Ok(config.documents_url()), id_token }
    }

    /// Store whose reads all fail as `unavailable`; used when config is incomplete.
    pub fn unconfigured(error: ConfigError) -> Self {
        Self { documents_url: Err(error), id_token: None }
    }

    /// Build from a config result, degrading to [`RestDocumentStore::unconfigured`].
    pub fn from_config(config: &Result<AppConfig, ConfigError>, id_token: Option<String>) -> Self {
        match config {
            Ok(config) => Self::new(config, id_token),
            Err(e) => Self::unconfigured(e.clone()),
        }
    }

    fn document_url(&self, doc: &DocRef) -> Result<String, StoreError> {
        match &self.documents_url {
            Ok(base) => Ok(format!("{base}/{}", doc.path())),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }
}

impl DocumentStore for RestDocumentStore {
    async fn get(&self, doc: &DocRef) -> Result<Option<Document>, StoreError> {
        let url = self.document_url(doc)?;
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(&url);
            if let Some(token) = &self.id_token {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }
            let resp = request
                .send()
                .await
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
            let status = resp.status();
            if status == 404 {
                return Ok(None);
            }
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(status_error(status, &body));
            }
            let body: Value = resp.json().await.map_err(|e| StoreError::Malformed(e.to_string()))?;
            decode_document(&body).map(Some)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, &self.id_token);
            Err(StoreError::Unavailable("not available on server".to_owned()))
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
/// Map a non-success HTTP status (and error body) onto a [`StoreError`].
pub(crate) fn status_error(status: u16, body: &str) -> StoreError {
    match status {
        401 | 403 => StoreError::PermissionDenied,
        408 | 429 | 500..=599 => StoreError::Unavailable(error_message(body).unwrap_or_else(|| format!("status {status}"))),
        _ => StoreError::Other { status, message: error_message(body).unwrap_or_default() },
    }
}

#[cfg(any(test, feature = "hydrate"))]
/// Extract `error.message` from a Google API error body.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("error")?.get("message")?.as_str().map(str::to_owned)
}

#[cfg(any(test, feature = "hydrate"))]
/// Decode a REST document resource (`{ name, fields, ... }`).
///
/// # Errors
///
/// Returns [`StoreError::Malformed`] when the body is not a document object.
pub(crate) fn decode_document(body: &Value) -> Result<Document, StoreError> {
    let obj = body
        .as_object()
        .ok_or_else(|| StoreError::Malformed("document is not an object".to_owned()))?;
    let fields = match obj.get("fields") {
        None => Map::new(),
        Some(Value::Object(fields)) => decode_fields(fields),
        Some(_) => return Err(StoreError::Malformed("document fields is not an object".to_owned())),
    };
    Ok(Document::new(fields))
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields.iter().map(|(k, v)| (k.clone(), decode_value(v))).collect()
}

#[cfg(any(test, feature = "hydrate"))]
/// Convert one typed REST value (`{"stringValue": "x"}`) to plain JSON.
pub(crate) fn decode_value(typed: &Value) -> Value {
    let Some(obj) = typed.as_object() else {
        return Value::Null;
    };
    let Some((kind, inner)) = obj.iter().next() else {
        return Value::Null;
    };
    match kind.as_str() {
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" | "booleanValue" => inner.clone(),
        // int64 travels as a decimal string.
        "integerValue" => match inner {
            Value::String(raw) => raw.parse::<i64>().map_or(Value::Null, Value::from),
            Value::Number(_) => inner.clone(),
            _ => Value::Null,
        },
        "doubleValue" => match inner {
            Value::Number(_) => inner.clone(),
            _ => Value::Null,
        },
        "geoPointValue" => inner.clone(),
        "mapValue" => match inner.get("fields") {
            Some(Value::Object(fields)) => Value::Object(decode_fields(fields)),
            _ => Value::Object(Map::new()),
        },
        "arrayValue" => match inner.get("values") {
            Some(Value::Array(values)) => Value::Array(values.iter().map(decode_value).collect()),
            _ => Value::Array(Vec::new()),
        },
        _ => Value::Null,
    }
}
