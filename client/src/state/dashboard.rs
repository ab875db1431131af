//! Role-conditional sample content for the dashboard page.
//!
//! The figures are fixed placeholders until sensor data is wired in. Keeping
//! them here instead of inline in the view lets the per-role selection be
//! tested without rendering.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{Role, UserProfile};
use crate::state::session::Session;

/// One headline number on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Colour of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Good,
    Warning,
    Alert,
}

impl Tone {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Good => "badge badge--good",
            Self::Warning => "badge badge--warning",
            Self::Alert => "badge badge--alert",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

/// Row in one of the dashboard list panels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub title: &'static str,
    pub aside: Option<&'static str>,
    pub detail: String,
    pub badge: Option<Badge>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub subtitle: Option<String>,
    pub entries: Vec<Entry>,
}

/// Everything the overview tab shows for one role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleOverview {
    pub stats: [Stat; 4],
    pub map_title: &'static str,
    /// Panel beside the map.
    pub primary: Panel,
    /// Panel below the map.
    pub secondary: Panel,
}

/// Tabs across the top of the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Reports,
    Admin,
}

impl DashboardTab {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Reports => "Reports",
            Self::Admin => "Admin",
        }
    }
}

/// Tabs visible in `session`; Admin is reserved for super users.
pub fn tabs_for(session: &Session) -> Vec<DashboardTab> {
    let mut tabs = vec![DashboardTab::Overview, DashboardTab::Reports];
    if session.has_role(&Role::SuperUser) {
        tabs.push(DashboardTab::Admin);
    }
    tabs
}

/// A sensor pin on the forest map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorPin {
    pub id: u32,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub status: &'static str,
    pub last_detection: &'static str,
}

/// Map centre (Nairobi).
pub const MAP_CENTER: (f64, f64) = (-1.2921, 36.8219);

pub const SENSOR_PINS: [SensorPin; 4] = [
    SensorPin { id: 1, name: "Karura Forest Sensor 1", lat: -1.2728, lng: 36.8219, status: "active", last_detection: "2 hours ago" },
    SensorPin { id: 2, name: "Karura Forest Sensor 2", lat: -1.2700, lng: 36.8250, status: "active", last_detection: "5 hours ago" },
    SensorPin { id: 3, name: "Uhuru Park Sensor 1", lat: -1.2800, lng: 36.8100, status: "warning", last_detection: "1 hour ago" },
    SensorPin { id: 4, name: "Ngong Forest Sensor 1", lat: -1.3500, lng: 36.7000, status: "active", last_detection: "1 day ago" },
];

fn status_badge(status: &'static str) -> Badge {
    let tone = match status {
        "Operational" | "Active" => Tone::Good,
        "High" => Tone::Alert,
        _ => Tone::Warning,
    };
    Badge { label: status, tone }
}

/// Overview content for the user's role, or `None` for roles without a
/// tailored dashboard.
pub fn overview_for(user: &UserProfile) -> Option<RoleOverview> {
    match user.role {
        Role::ForestRanger => Some(ranger_overview(user)),
        Role::RegionalManager => Some(manager_overview(user)),
        Role::SuperUser => Some(super_user_overview()),
        Role::Other(_) => None,
    }
}

fn ranger_overview(user: &UserProfile) -> RoleOverview {
    let alerts = [
        ("Chainsaw Detected", "Karura Forest", "2 hours ago", "High"),
        ("Unusual Activity", "Uhuru Park", "5 hours ago", "Medium"),
    ];
    RoleOverview {
        stats: [
            Stat { value: "12", label: "Active Sensors" },
            Stat { value: "3", label: "Alerts Today" },
            Stat { value: "87%", label: "Battery Avg" },
            Stat { value: "98%", label: "Signal Strength" },
        ],
        map_title: "Live Forest Map",
        primary: Panel {
            title: "Recent Alerts".to_owned(),
            subtitle: None,
            entries: alerts
                .into_iter()
                .map(|(kind, forest, when, priority)| Entry {
                    title: kind,
                    aside: None,
                    detail: format!("{forest} • {when}"),
                    badge: Some(status_badge(priority)),
                })
                .collect(),
        },
        secondary: Panel {
            title: format!("Your Region: {}", user.region),
            subtitle: Some(format!("Organization: {}", user.organization)),
            entries: vec![Entry {
                title: "Daily Report",
                aside: None,
                detail: "All sensors operational. No critical alerts in the last 24 hours.".to_owned(),
                badge: None,
            }],
        },
    }
}

fn manager_overview(user: &UserProfile) -> RoleOverview {
    let forests = [
        ("Karura Forest", 12, 3, "Operational"),
        ("Uhuru Park", 8, 1, "Operational"),
        ("Ngong Forest", 15, 5, "Warning"),
    ];
    let teams = [
        ("Alpha Team", "John Ranger", 5, "2 hours"),
        ("Beta Team", "Mary Mwangi", 3, "1.5 hours"),
    ];
    RoleOverview {
        stats: [
            Stat { value: "48", label: "Active Sensors" },
            Stat { value: "12", label: "Alerts This Week" },
            Stat { value: "92%", label: "System Uptime" },
            Stat { value: "3", label: "Teams Active" },
        ],
        map_title: "Live Regional Map",
        primary: Panel {
            title: format!("Regional Overview: {}", user.region),
            subtitle: Some(format!("Organization: {}", user.organization)),
            entries: forests
                .into_iter()
                .map(|(forest, sensors, alerts, status)| Entry {
                    title: forest,
                    aside: None,
                    detail: format!("{sensors} sensors • {alerts} alerts"),
                    badge: Some(status_badge(status)),
                })
                .collect(),
        },
        secondary: Panel {
            title: "Team Performance".to_owned(),
            subtitle: None,
            entries: teams
                .into_iter()
                .map(|(team, ranger, handled, response)| Entry {
                    title: team,
                    aside: Some(ranger),
                    detail: format!("{handled} alerts handled • Avg. response: {response}"),
                    badge: None,
                })
                .collect(),
        },
    }
}

fn super_user_overview() -> RoleOverview {
    let regions = [("Nairobi", 5, 48, 12), ("Central Kenya", 8, 76, 8), ("Coast", 3, 32, 5)];
    let organizations = [
        ("Nairobi Conservation Team", "Nairobi", "Active"),
        ("Central Kenya Forest Authority", "Central Kenya", "Active"),
        ("Coast Environmental Group", "Coast", "Pending"),
    ];
    RoleOverview {
        stats: [
            Stat { value: "234", label: "Total Sensors" },
            Stat { value: "42", label: "Active Alerts" },
            Stat { value: "89%", label: "Overall Uptime" },
            Stat { value: "18", label: "Organizations" },
        ],
        map_title: "Live System Map",
        primary: Panel {
            title: "System-Wide Overview".to_owned(),
            subtitle: None,
            entries: regions
                .into_iter()
                .map(|(region, forests, sensors, alerts)| Entry {
                    title: region,
                    aside: None,
                    detail: format!("{forests} forests • {sensors} sensors • {alerts} alerts"),
                    badge: None,
                })
                .collect(),
        },
        secondary: Panel {
            title: "Organization Management".to_owned(),
            subtitle: None,
            entries: organizations
                .into_iter()
                .map(|(org, region, status)| Entry {
                    title: org,
                    aside: None,
                    detail: region.to_owned(),
                    badge: Some(status_badge(status)),
                })
                .collect(),
        },
    }
}
