//! Login view rendered in place of any non-public page for anonymous users.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access gate mounts this view instead of the requested page. Submitting
//! calls `SessionStore::sign_in`; on success the user is sent to `/`, never
//! back to the page that triggered the login.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Session, SessionStore};

const MISSING_FIELDS: &str = "Please enter both username and password";

/// Check the form before it reaches the store. The username is trimmed; the
/// password is passed through as typed.
fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<Session>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let validation = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();

    // Drop an error left over from an earlier attempt.
    {
        let store = store.clone();
        Effect::new(move || store.clear_error());
    }

    let pending = move || session.with(Session::is_pending);
    let server_error = move || session.with(|s| s.last_error.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending() {
            return;
        }
        let (user, pass) = match validate_credentials(&username.get(), &password.get()) {
            Ok(pair) => pair,
            Err(message) => {
                validation.set(Some(message));
                return;
            }
        };
        validation.set(None);
        password.set(String::new());

        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if store.sign_in(&user, &pass).await.is_ok() {
                navigate("/", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__logo">"🌳"</div>
                <h1>"EcoGuard"</h1>
                <p class="login-card__subtitle">"Forest Protection System"</p>
                <form class="login-form" on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Enter your username"
                        disabled=pending
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Enter your password"
                        disabled=pending
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=pending>
                        {move || if pending() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || validation.get().is_some()>
                    <p class="login-message login-message--error">
                        {move || validation.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || server_error().is_some()>
                    <p class="login-message login-message--error">
                        {move || server_error().unwrap_or_default()}
                    </p>
                </Show>
                <div class="login-hint">
                    <h3>"Demo Credentials:"</h3>
                    <ul>
                        <li>"Forest Ranger: " <code>"ranger1"</code> " / " <code>"password"</code></li>
                        <li>"Regional Manager: " <code>"manager1"</code> " / " <code>"password"</code></li>
                        <li>"Super User: " <code>"admin"</code> " / " <code>"password"</code></li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
