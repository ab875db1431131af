//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::gate::GatedPage;
use crate::net::api::HttpAuthenticator;
use crate::state::session::SessionStore;
use crate::util::auth::Page;
use crate::util::token_store::LocalStorageTokens;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store, mirrors it into an `RwSignal<Session>`, and
/// provides both as context. Reconciliation with a stored token starts once
/// the app is mounted in the browser, so the server render and the first
/// client render agree on an anonymous session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new(Arc::new(HttpAuthenticator::default()), Arc::new(LocalStorageTokens));
    let session = RwSignal::new(store.snapshot());
    store.subscribe(move |next| session.set(next.clone()));

    provide_context(session);
    provide_context(store.clone());

    Effect::new(move || {
        let store = store.clone();
        leptos::task::spawn_local(async move { store.reconcile().await });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ecoguard.css"/>
        <Title text="EcoGuard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <GatedPage page=Page::Home/> }/>
                <Route path=StaticSegment("about") view=|| view! { <GatedPage page=Page::About/> }/>
                <Route path=StaticSegment("contact") view=|| view! { <GatedPage page=Page::Contact/> }/>
                <Route path=StaticSegment("analytics") view=|| view! { <GatedPage page=Page::Analytics/> }/>
                <Route path=StaticSegment("research") view=|| view! { <GatedPage page=Page::Research/> }/>
                <Route path=StaticSegment("dashboard") view=|| view! { <GatedPage page=Page::Dashboard/> }/>
                <Route path=StaticSegment("signup") view=|| view! { <GatedPage page=Page::Signup/> }/>
                <Route path=StaticSegment("dashboards") view=|| view! { <GatedPage page=Page::Dashboards/> }/>
            </Routes>
        </Router>
    }
}
