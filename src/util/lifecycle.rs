//! Cooperative cancellation for async work owned by a component.
//!
//! A [`Lifecycle`] is a generation counter. Work started under a [`Ticket`] must
//! check [`Ticket::is_live`] after every await and before touching state; the
//! owner bumps the generation on cleanup or when its inputs change.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Debug, Default)]
pub struct Lifecycle {
    generation: Arc<AtomicU64>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate outstanding tickets and issue a fresh one.
    pub fn begin(&self) -> Ticket {
        let issued = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        Ticket { generation: Arc::clone(&self.generation), issued }
    }

    /// Invalidate all outstanding tickets.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }
}

/// Snapshot of a [`Lifecycle`] generation.
#[derive(Clone, Debug)]
pub struct Ticket {
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl Ticket {
    pub fn is_live(&self) -> bool {
        self.generation.load(Ordering::Relaxed) == self.issued
    }
}
