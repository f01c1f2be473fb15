//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the layout's decision logic and browser glue so pages
//! and components stay thin and the logic stays testable off-browser.

pub mod auth;
pub mod error_channel;
pub mod lifecycle;
pub mod network_status;
pub mod role_resolver;
