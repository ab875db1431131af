//! Contact page with a locally validated enquiry form.
//!
//! Nothing is sent anywhere; a valid submission shows a confirmation and
//! resets the form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn validate_contact(form: &ContactForm) -> Result<(), &'static str> {
    if form.name.trim().is_empty() || form.email.trim().is_empty() || form.message.trim().is_empty() {
        return Err("Please fill in your name, email and message.");
    }
    if !looks_like_email(form.email.trim()) {
        return Err("Please enter a valid email address.");
    }
    Ok(())
}

/// Minimal shape check: one `@` with something on both sides and a dot in
/// the domain.
pub(crate) fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.contains('@') && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let notice = RwSignal::new(None::<Result<&'static str, &'static str>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(validate_contact) {
            Ok(()) => {
                log::info!("contact enquiry accepted");
                form.set(ContactForm::default());
                notice.set(Some(Ok("Message Sent! We'll get back to you within 24 hours.")));
            }
            Err(message) => notice.set(Some(Err(message))),
        }
    };

    view! {
        <div class="contact">
            <h1>"Get in Touch"</h1>
            <p class="page__lead">
                "Whether you're interested in partnerships, research collaboration, or deployment - we'd love to hear from you"
            </p>
            <form class="form" on:submit=on_submit>
                <label>"Name"</label>
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <label>"Email"</label>
                <input
                    type="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <label>"Message"</label>
                <textarea
                    rows="5"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit">"Send Message"</button>
            </form>
            {move || notice.get().map(|n| match n {
                Ok(text) => view! { <p class="form__notice form__notice--ok">{text}</p> }.into_any(),
                Err(text) => view! { <p class="form__notice form__notice--error">{text}</p> }.into_any(),
            })}
        </div>
    }
}
