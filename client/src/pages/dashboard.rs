//! Role-conditional dashboard for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable through the access gate with a signed-in session. Content
//! comes from `state::dashboard`; this page picks the tab and lays it out.

use leptos::prelude::*;

use crate::components::sensor_map::SensorMap;
use crate::components::stat_card::StatCard;
use crate::net::types::UserProfile;
use crate::state::dashboard::{DashboardTab, Panel, RoleOverview, overview_for, tabs_for};
use crate::state::session::Session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let tab = RwSignal::new(DashboardTab::Overview);

    move || {
        let Some(user) = session.with(|s| s.user.clone()) else {
            return view! { <p class="page__empty">"Sign in to view the dashboard."</p> }.into_any();
        };
        let tabs = session.with(tabs_for);
        // A role change can remove the Admin tab while it is selected.
        if !tabs.contains(&tab.get_untracked()) {
            tab.set(DashboardTab::Overview);
        }

        view! {
            <div class="dashboard">
                <header class="dashboard__header">
                    <h1>{format!("Welcome, {}", user.name)}</h1>
                    <p class="dashboard__role">{user.role.label()} " • " {user.organization.clone()}</p>
                </header>
                <nav class="tabs">
                    {tabs
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab.get() == t
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                {move || tab_body(tab.get(), &user)}
            </div>
        }
        .into_any()
    }
}

fn tab_body(tab: DashboardTab, user: &UserProfile) -> AnyView {
    match tab {
        DashboardTab::Overview => match overview_for(user) {
            Some(overview) => overview_view(overview),
            None => view! {
                <p class="page__empty">
                    {format!("No dashboard is configured for the {} role.", user.role.label())}
                </p>
            }
            .into_any(),
        },
        DashboardTab::Reports => view! {
            <section class="panel">
                <h3 class="panel__title">"Reports"</h3>
                <p>"Scheduled reports will appear here."</p>
            </section>
        }
        .into_any(),
        DashboardTab::Admin => view! {
            <section class="panel">
                <h3 class="panel__title">"Administration"</h3>
                <p>"User and organization management will appear here."</p>
            </section>
        }
        .into_any(),
    }
}

fn overview_view(overview: RoleOverview) -> AnyView {
    let RoleOverview { stats, map_title, primary, secondary } = overview;
    view! {
        <div class="dashboard__stats">
            {stats.into_iter().map(|stat| view! { <StatCard stat=stat/> }).collect_view()}
        </div>
        <div class="dashboard__grid">
            <SensorMap title=map_title/>
            {panel_view(primary)}
        </div>
        {panel_view(secondary)}
    }
    .into_any()
}

fn panel_view(panel: Panel) -> impl IntoView {
    view! {
        <section class="panel">
            <h3 class="panel__title">{panel.title}</h3>
            {panel.subtitle.map(|s| view! { <p class="panel__subtitle">{s}</p> })}
            <ul class="panel__list">
                {panel
                    .entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class="panel__entry">
                                <div class="panel__entry-head">
                                    <span class="panel__entry-title">{entry.title}</span>
                                    {entry.aside.map(|a| view! { <span class="panel__entry-aside">{a}</span> })}
                                    {entry.badge.map(|b| view! { <span class=b.tone.class()>{b.label}</span> })}
                                </div>
                                <p class="panel__entry-detail">{entry.detail}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
