//! Research data portal placeholder.

use leptos::prelude::*;

#[component]
pub fn ResearchPage() -> impl IntoView {
    view! {
        <div class="research">
            <h1>"Research Data Portal"</h1>
            <p class="page__lead">
                "Access comprehensive datasets for conservation research, climate studies, and policy analysis"
            </p>
            <section class="panel">
                <p>"The dataset catalog and case studies will appear here."</p>
            </section>
        </div>
    }
}
