//! Launcher for the externally hosted dashboards.
//!
//! Each entry runs as its own web app on a local port; selecting one embeds
//! it in an iframe until the user goes back to the list.

#[cfg(test)]
#[path = "dashboards_test.rs"]
mod dashboards_test;

use leptos::prelude::*;

/// Host the dashboard apps are served from.
pub const DASHBOARD_HOST: &str = "localhost";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmbeddedDashboard {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub port: u16,
}

impl EmbeddedDashboard {
    pub fn embed_url(&self) -> String {
        format!("http://{DASHBOARD_HOST}:{}", self.port)
    }

    /// Script that starts this dashboard's server.
    pub fn launcher_script(&self) -> String {
        format!("run_{}_dashboard.bat", self.id)
    }
}

pub const EMBEDDED_DASHBOARDS: [EmbeddedDashboard; 7] = [
    EmbeddedDashboard {
        id: "main",
        name: "Main Dashboard",
        description: "The primary EcoGuard dashboard with overview of all forest monitoring systems",
        port: 8501,
    },
    EmbeddedDashboard {
        id: "institutional",
        name: "Institutional Dashboard",
        description: "Dashboard for institutional users with advanced management features",
        port: 8502,
    },
    EmbeddedDashboard {
        id: "policy",
        name: "Policy Dashboard",
        description: "Dashboard for policy makers with aggregated data and insights",
        port: 8503,
    },
    EmbeddedDashboard {
        id: "research",
        name: "Research Dashboard",
        description: "Dashboard for researchers with detailed data analysis tools",
        port: 8504,
    },
    EmbeddedDashboard {
        id: "nairobi",
        name: "Nairobi Forest Dashboard",
        description: "Specialized dashboard for monitoring Nairobi's urban forests",
        port: 8505,
    },
    EmbeddedDashboard {
        id: "enhanced",
        name: "Enhanced Dashboard",
        description: "Advanced dashboard with additional analytics and reporting features",
        port: 8506,
    },
    EmbeddedDashboard {
        id: "super-user",
        name: "Super User Dashboard",
        description: "Administrative dashboard with full system access and user management",
        port: 8507,
    },
];

pub fn find_dashboard(id: &str) -> Option<EmbeddedDashboard> {
    EMBEDDED_DASHBOARDS.into_iter().find(|d| d.id == id)
}

#[component]
pub fn DashboardsPage() -> impl IntoView {
    let selected = RwSignal::new(None::<&'static str>);

    move || match selected.get().and_then(find_dashboard) {
        Some(dashboard) => view! {
            <div class="embed">
                <div class="embed__header">
                    <h1>{dashboard.name}</h1>
                    <button class="btn" on:click=move |_| selected.set(None)>
                        "← Back to Dashboard List"
                    </button>
                </div>
                <iframe class="embed__frame" src=dashboard.embed_url() title=dashboard.name></iframe>
                <p class="embed__note">
                    "If the dashboard doesn't load, start its server with "
                    <code>{dashboard.launcher_script()}</code>
                    " or "
                    <code>"run_all_dashboards.bat"</code>
                    "."
                </p>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="launcher">
                <h1>"EcoGuard Dashboards"</h1>
                <p class="launcher__subtitle">"Access all EcoGuard dashboards from this unified interface"</p>
                <div class="launcher__grid">
                    {EMBEDDED_DASHBOARDS
                        .into_iter()
                        .map(|d| {
                            view! {
                                <div class="launcher__card">
                                    <h2>{d.name}</h2>
                                    <p>{d.description}</p>
                                    <button class="btn btn--primary" on:click=move |_| selected.set(Some(d.id))>
                                        "Open Dashboard"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
    }
}
