//! Analytics placeholder.

use leptos::prelude::*;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <div class="analytics">
            <h1>"Analytics Dashboard"</h1>
            <p class="page__lead">"Real-time insights into forest protection and threat detection"</p>
            <section class="panel">
                <h3 class="panel__title">"Threat Detection Analytics"</h3>
                <p>"Charts and detection data will appear here."</p>
            </section>
        </div>
    }
}
