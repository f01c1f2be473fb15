//! Networking and backend-boundary modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` performs keyed document reads against the hosted backend, `session`
//! restores the signed-in identity, and `types` defines the shared domain schema.

pub mod session;
pub mod store;
pub mod types;
