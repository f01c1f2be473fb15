//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Dashboards render inside `AppLayout`, which owns access control. The login
//! page sits outside the guard.

pub mod dashboard;
pub mod login;
