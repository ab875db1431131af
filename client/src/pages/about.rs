//! Mission and technology overview.

use leptos::prelude::*;

const SENSOR_FEATURES: [&str; 6] = [
    "Solar-powered with 7-day battery backup",
    "IP67 weatherproof rating for harsh conditions",
    "High-fidelity microphone array for sound detection",
    "4K camera for visual monitoring",
    "LoRa mesh networking (10km+ range)",
    "Edge computing for real-time processing",
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <h1>"About EcoGuard"</h1>
            <p class="page__lead">
                "Protecting Kenya's forests through innovation, inspired by Wangari Maathai's legacy"
            </p>
            <section class="panel">
                <h2>"Our Mission and Vision"</h2>
                <p>
                    "To protect Kenya's forests through AI-powered threat detection, verified reforestation, \
                     and sustainable carbon credit systems. We combine cutting-edge technology with local \
                     conservation efforts to create lasting environmental impact."
                </p>
            </section>
            <section class="panel">
                <h2>"Inspired by Wangari Maathai"</h2>
                <p>
                    "Professor Wangari Maathai's Green Belt Movement planted over 51 million trees across \
                     Kenya, empowering communities and restoring ecosystems. Her vision of environmental \
                     conservation combined with social justice continues to inspire our work."
                </p>
            </section>
            <section class="panel">
                <h2>"Our Technology"</h2>
                <p>"Solar-powered, autonomous sensors equipped with advanced ML models and long-range connectivity"</p>
                <ul>{SENSOR_FEATURES.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}</ul>
            </section>
        </div>
    }
}
