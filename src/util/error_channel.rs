//! Structured error channel for failures that need app-level handling.
//!
//! DESIGN
//! ======
//! Producers depend on [`ErrorSink`] and never decide how an error is shown.
//! The composition root provides one [`ErrorChannel`] through context and
//! registers the subscribers that log or display events. Tests substitute a
//! recording sink.

#[cfg(test)]
#[path = "error_channel_test.rs"]
mod error_channel_test;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use serde::Serialize;

/// Document-store operation that was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreOperation {
    Get,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("get"),
        }
    }
}

/// A store request denied by security rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("missing or insufficient permissions: {operation} on {path}")]
pub struct PermissionError {
    /// Document path, e.g. `users/abc123`.
    pub path: String,
    pub operation: StoreOperation,
}

impl PermissionError {
    pub fn get(path: impl Into<String>) -> Self {
        Self { path: path.into(), operation: StoreOperation::Get }
    }
}

/// Event published on the channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "error", rename_all = "kebab-case")]
pub enum ChannelEvent {
    PermissionError(PermissionError),
}

impl ChannelEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PermissionError(_) => "permission-error",
        }
    }
}

/// Publish point for structured errors.
pub trait ErrorSink {
    fn publish(&self, event: ChannelEvent);
}

type Handler = Arc<dyn Fn(&ChannelEvent) + Send + Sync>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// In-process publish/subscribe channel for [`ChannelEvent`]s.
#[derive(Clone, Default)]
pub struct ErrorChannel {
    inner: Arc<Mutex<Subscribers>>,
}

impl fmt::Debug for ErrorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorChannel")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl ErrorChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. It stays registered until the returned handle is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&ChannelEvent) + Send + Sync + 'static,
    {
        let mut subs = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        subs.next_id += 1;
        let id = subs.next_id;
        subs.handlers.push((id, Arc::new(handler)));
        Subscription { channel: Arc::downgrade(&self.inner), id }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).handlers.len()
    }
}

impl ErrorSink for ErrorChannel {
    fn publish(&self, event: ChannelEvent) {
        // Snapshot so handlers may subscribe/unsubscribe without deadlocking.
        let handlers: Vec<Handler> = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .handlers
            .iter()
            .map(|(_, h)| Arc::clone(h))
            .collect();
        if handlers.is_empty() {
            leptos::logging::warn!("unhandled {} event: {event:?}", event.name());
        }
        for handler in handlers {
            handler(&event);
        }
    }
}

/// RAII handle returned by [`ErrorChannel::subscribe`].
#[derive(Debug)]
pub struct Subscription {
    channel: Weak<Mutex<Subscribers>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.channel.upgrade() {
            inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .handlers
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Render an event as a single JSON line for the console.
pub fn event_log_line(event: &ChannelEvent) -> String {
    serde_json::to_string(event).unwrap_or_else(|_| format!("{event:?}"))
}
