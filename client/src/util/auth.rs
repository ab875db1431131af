//! Access gate: maps (session, requested page) to what gets rendered.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route renders through `components::gate::GatedPage`, which calls
//! [`decide_access`] on each session change. The decision is stateless and
//! re-derived every time; nothing here remembers the requested page, so a
//! forced login never redirects back to it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;
use crate::state::session::Session;

/// Every page the router recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Contact,
    Analytics,
    Research,
    Dashboard,
    Signup,
    /// Launcher for the externally hosted dashboards.
    Dashboards,
}

impl Page {
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::About,
        Self::Contact,
        Self::Analytics,
        Self::Research,
        Self::Dashboard,
        Self::Signup,
        Self::Dashboards,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Analytics => "/analytics",
            Self::Research => "/research",
            Self::Dashboard => "/dashboard",
            Self::Signup => "/signup",
            Self::Dashboards => "/dashboards",
        }
    }

    /// Navigation label.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Analytics => "Analytics",
            Self::Research => "Research",
            Self::Dashboard => "Dashboard",
            Self::Signup => "Register",
            Self::Dashboards => "Legacy Dashboards",
        }
    }

    /// Pages reachable without signing in.
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Home | Self::About | Self::Contact | Self::Signup)
    }
}

/// Outcome of the access gate.
#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    /// Startup reconciliation is in flight; show a placeholder only.
    Loading,
    /// Render `page` under the navigation bar. `identity` is the signed-in
    /// user, absent for anonymous visitors of public pages.
    Render { page: Page, identity: Option<UserProfile> },
    /// Show the login view in place of the requested page.
    Login,
}

/// Decide what to render for `requested` given the current session.
///
/// Rules, first match wins: reconciling → loading; signed in → the page;
/// public page → the page; otherwise → login.
pub fn decide_access(session: &Session, requested: Page) -> Access {
    if session.is_reconciling() {
        return Access::Loading;
    }
    if let Some(user) = &session.user {
        return Access::Render { page: requested, identity: Some(user.clone()) };
    }
    if requested.is_public() {
        return Access::Render { page: requested, identity: None };
    }
    Access::Login
}
