//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page renders one entry of `util::auth::Page`; `components::gate`
//! decides whether it is shown. `login` is not routed directly and only
//! appears in place of a gated page.

pub mod about;
pub mod analytics;
pub mod contact;
pub mod dashboard;
pub mod dashboards;
pub mod home;
pub mod login;
pub mod research;
pub mod signup;
