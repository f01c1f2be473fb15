//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `role`, `toast`) so the layout and its
//! chrome components can depend on small focused models.

pub mod auth;
pub mod role;
pub mod toast;
