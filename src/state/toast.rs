//! Transient user-visible notifications.
//!
//! DESIGN
//! ======
//! Producers depend on the [`Notifier`] trait rather than the reactive store so
//! resolution logic can be exercised with a recording notifier in tests.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::{RwSignal, Update};

/// Maximum number of toasts kept on screen; newer toasts evict older ones.
pub const TOAST_LIMIT: usize = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// What a producer asks to display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub variant: ToastVariant,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { variant: ToastVariant::Destructive, title: title.into(), description: description.into() }
    }
}

/// A displayed notice with its dismiss handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    /// Visible toasts, newest first.
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a notice and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.insert(0, Toast { id, notice });
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Sink for user-visible notifications.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl Notifier for RwSignal<ToastState> {
    fn notify(&self, notice: Notice) {
        self.update(|state| {
            state.push(notice);
        });
    }
}
