//! Top navigation bar with identity block and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every gated page. Signed-in users get the dashboard links,
//! their name, role and organization, and a Logout button; anonymous
//! visitors get Register and Login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Session, SessionStore};
use crate::util::auth::Page;

/// Links shown to everyone, in display order.
const PUBLIC_LINKS: [Page; 5] = [Page::Home, Page::About, Page::Analytics, Page::Research, Page::Contact];

/// Links shown only when signed in.
const MEMBER_LINKS: [Page; 2] = [Page::Dashboard, Page::Dashboards];

fn link_class(page: Page, current: Page) -> &'static str {
    if page == current { "nav__link nav__link--active" } else { "nav__link" }
}

/// Shared top bar. `current` highlights the active link.
#[component]
pub fn Navigation(current: Page) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionStore>();
    let menu_open = RwSignal::new(false);

    let user = move || session.with(|s| s.user.clone());
    let signed_in = move || session.with(Session::is_signed_in);

    let navigate = use_navigate();
    let on_logout = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        let store = store.clone();
        // sign_out clears local state on its first poll; the endpoint
        // answer only matters to the log.
        leptos::task::spawn_local(async move {
            let _ = store.sign_out().await;
        });
        navigate("/", NavigateOptions::default());
    };

    let links = move || {
        let mut pages = PUBLIC_LINKS.to_vec();
        if signed_in() {
            pages.extend(MEMBER_LINKS);
        }
        pages
            .into_iter()
            .map(|page| {
                view! {
                    <a
                        class=link_class(page, current)
                        href=page.path()
                        on:click=move |_| menu_open.set(false)
                    >
                        {page.title()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="nav" class:nav--open=move || menu_open.get()>
            <a class="nav__brand" href="/">
                <span class="nav__logo">"🐦"</span>
                <span class="nav__name">"EcoGuard"</span>
            </a>
            <button
                class="nav__menu-toggle"
                title="Open main menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <div class="nav__links">{links}</div>
            <div class="nav__account">
                {move || match user() {
                    Some(user) => view! {
                        <div class="nav__identity">
                            <span class="nav__identity-name">{user.name}</span>
                            <span class="nav__identity-role">{user.role.label()}</span>
                            <span class="nav__identity-org">{user.organization}</span>
                        </div>
                        <button class="btn btn--danger" on:click=on_logout.clone()>
                            "Logout"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <a class="nav__link" href=Page::Signup.path()>
                            {Page::Signup.title()}
                        </a>
                        <a class="nav__link" href=Page::Dashboard.path()>
                            "Login"
                        </a>
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}
