//! Route wrapper that applies the access gate to a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `<Route>` in `app.rs` renders `GatedPage` with its [`Page`]. The
//! wrapper re-runs [`decide_access`] whenever the session signal changes and
//! swaps between the loading placeholder, the page, and the login view.

use leptos::prelude::*;

use crate::components::navigation::Navigation;
use crate::pages::about::AboutPage;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::contact::ContactPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::dashboards::DashboardsPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::research::ResearchPage;
use crate::pages::signup::SignupPage;
use crate::state::session::Session;
use crate::util::auth::{Access, Page, decide_access};

/// Text shown while the stored session is being checked.
pub const LOADING_TEXT: &str = "Checking authentication...";

/// Render `page` if the session allows it.
#[component]
pub fn GatedPage(page: Page) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let access = Memo::new(move |_| session.with(|s| decide_access(s, page)));

    move || match access.get() {
        Access::Loading => view! {
            <div class="gate-loading">
                <div class="gate-loading__spinner"></div>
                <p>{LOADING_TEXT}</p>
            </div>
        }
        .into_any(),
        Access::Render { page, .. } => view! {
            <Navigation current=page/>
            <main class="page">{page_view(page)}</main>
        }
        .into_any(),
        Access::Login => view! {
            <Navigation current=page/>
            <LoginPage/>
        }
        .into_any(),
    }
}

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::Contact => view! { <ContactPage/> }.into_any(),
        Page::Analytics => view! { <AnalyticsPage/> }.into_any(),
        Page::Research => view! { <ResearchPage/> }.into_any(),
        Page::Dashboard => view! { <DashboardPage/> }.into_any(),
        Page::Signup => view! { <SignupPage/> }.into_any(),
        Page::Dashboards => view! { <DashboardsPage/> }.into_any(),
    }
}
