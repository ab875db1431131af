//! Landing page.

use leptos::prelude::*;

use crate::util::auth::Page;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"EcoGuard - Forest Protection System"</h1>
            <p class="hero__tagline">"Protecting Kenya's forests with AI-powered intelligence"</p>
            <div class="hero__actions">
                <a class="btn btn--primary" href=Page::Signup.path()>"Register your organization"</a>
                <a class="btn" href=Page::About.path()>"Learn more"</a>
            </div>
        </section>
        <section class="features">
            <div class="feature">
                <h3>"Acoustic threat detection"</h3>
                <p>"Sensors recognise chainsaws and vehicles in real time and alert rangers on patrol."</p>
            </div>
            <div class="feature">
                <h3>"Verified reforestation"</h3>
                <p>"Planting and survival data feed transparent carbon credit reporting."</p>
            </div>
            <div class="feature">
                <h3>"Open research data"</h3>
                <p>"Conservation datasets for climate studies and policy analysis."</p>
            </div>
        </section>
    }
}
