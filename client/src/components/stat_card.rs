//! Headline metric card.

use leptos::prelude::*;

use crate::state::dashboard::Stat;

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__value">{stat.value}</p>
            <p class="stat-card__label">{stat.label}</p>
        </div>
    }
}
