//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns authentication state and its transitions; `dashboard`
//! holds the role-conditional sample content rendered by the dashboard page.

pub mod dashboard;
pub mod session;
