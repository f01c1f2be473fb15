//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the guarded shell chrome while reading/writing shared
//! state from Leptos context providers.

pub mod app_layout;
pub mod network_badge;
pub mod toaster;
pub mod user_nav;
