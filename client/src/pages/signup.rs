//! Organization registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public page. Applications are validated locally and acknowledged; there
//! is no registration endpoint yet, so a valid submission is only logged.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::pages::contact::looks_like_email;

pub const FOREST_TYPES: [&str; 4] = [
    "Montane Forests (Mau, Aberdares, Mount Kenya)",
    "Tropical Rainforest (Kakamega)",
    "Dry Deciduous Forest (Rift Valley, Samburu)",
    "Woodland Savanna (Tsavo, Amboseli)",
];

pub const REGIONS: [&str; 7] = [
    "Nairobi",
    "Central Kenya",
    "Coast",
    "Rift Valley",
    "Western Kenya",
    "Northern Kenya",
    "Other",
];

const REQUIRED_FIELDS: &str = "Please fill in all required fields";
const SUBMITTED: &str = "Application Submitted! We'll review your application and contact you within 3 business days.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub organization_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub region: String,
    pub forest_types: Vec<String>,
    pub description: String,
}

impl SignupForm {
    /// Add `forest_type` if absent, remove it if present.
    pub fn toggle_forest_type(&mut self, forest_type: &str) {
        if let Some(index) = self.forest_types.iter().position(|t| t == forest_type) {
            self.forest_types.remove(index);
        } else {
            self.forest_types.push(forest_type.to_owned());
        }
    }
}

/// Every field except the description is required, with at least one forest
/// type selected.
fn validate_signup(form: &SignupForm) -> Result<(), &'static str> {
    let required = [&form.organization_name, &form.contact_person, &form.email, &form.phone, &form.region];
    if required.iter().any(|v| v.trim().is_empty()) || form.forest_types.is_empty() {
        return Err(REQUIRED_FIELDS);
    }
    if !looks_like_email(form.email.trim()) {
        return Err("Please enter a valid email address.");
    }
    if !REGIONS.contains(&form.region.as_str()) {
        return Err("Please select a region from the list.");
    }
    Ok(())
}

fn text_input(
    form: RwSignal<SignupForm>,
    kind: &'static str,
    placeholder: &'static str,
    get: fn(&SignupForm) -> &String,
    set: fn(&mut SignupForm, String),
) -> impl IntoView {
    view! {
        <input
            type=kind
            placeholder=placeholder
            prop:value=move || form.with(|f| get(f).clone())
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());
    let notice = RwSignal::new(None::<Result<&'static str, &'static str>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(validate_signup) {
            Ok(()) => {
                form.with(|f| log::info!("organization application from {} ({})", f.organization_name, f.region));
                form.set(SignupForm::default());
                notice.set(Some(Ok(SUBMITTED)));
            }
            Err(message) => notice.set(Some(Err(message))),
        }
    };

    view! {
        <div class="signup">
            <h1>"Organization Registration"</h1>
            <p class="page__lead">"Join EcoGuard to help protect Kenya's forests"</p>
            <form class="form" on:submit=on_submit>
                <h2>"Organization Information"</h2>
                <label>"Organization Name *"</label>
                {text_input(form, "text", "Enter organization name", |f| &f.organization_name, |f, v| f.organization_name = v)}
                <label>"Contact Person *"</label>
                {text_input(form, "text", "Full name", |f| &f.contact_person, |f, v| f.contact_person = v)}
                <label>"Email *"</label>
                {text_input(form, "email", "organization@example.com", |f| &f.email, |f, v| f.email = v)}
                <label>"Phone *"</label>
                {text_input(form, "tel", "+254 700 123 456", |f| &f.phone, |f, v| f.phone = v)}
                <label>"Region *"</label>
                <select
                    prop:value=move || form.with(|f| f.region.clone())
                    on:change=move |ev| form.update(|f| f.region = event_target_value(&ev))
                >
                    <option value="">"Select region"</option>
                    {REGIONS.into_iter().map(|region| view! { <option value=region>{region}</option> }).collect_view()}
                </select>
                <label>"Forest Types *"</label>
                <div class="form__checks">
                    {FOREST_TYPES
                        .into_iter()
                        .map(|forest_type| {
                            view! {
                                <label class="form__check">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.forest_types.iter().any(|t| t == forest_type))
                                        on:change=move |_| form.update(|f| f.toggle_forest_type(forest_type))
                                    />
                                    {forest_type}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
                <label>"Description"</label>
                <textarea
                    rows="4"
                    placeholder="Tell us about your organization and conservation efforts..."
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit">"Submit Application"</button>
            </form>
            {move || notice.get().map(|n| match n {
                Ok(text) => view! { <p class="form__notice form__notice--ok">{text}</p> }.into_any(),
                Err(text) => view! { <p class="form__notice form__notice--error">{text}</p> }.into_any(),
            })}
            <section class="panel">
                <h3 class="panel__title">"What happens next?"</h3>
                <ul>
                    <li>"Applications are reviewed by our regional coordinators"</li>
                    <li>"We may contact you for additional information"</li>
                    <li>"Approval typically takes 5-10 business days"</li>
                    <li>"Approved organizations receive access to our dashboard and resources"</li>
                </ul>
            </section>
        </div>
    }
}
