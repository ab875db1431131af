use super::*;

fn complete() -> SignupForm {
    SignupForm {
        organization_name: "Karura Friends".to_owned(),
        contact_person: "Achieng Otieno".to_owned(),
        email: "info@karura.example".to_owned(),
        phone: "+254 700 123 456".to_owned(),
        region: "Nairobi".to_owned(),
        forest_types: vec![FOREST_TYPES[0].to_owned()],
        description: String::new(),
    }
}

#[test]
fn validate_signup_accepts_complete_form_without_description() {
    assert_eq!(validate_signup(&complete()), Ok(()));
}

#[test]
fn validate_signup_requires_forest_type() {
    let mut form = complete();
    form.forest_types.clear();
    assert_eq!(validate_signup(&form), Err(REQUIRED_FIELDS));
}

#[test]
fn validate_signup_requires_contact_fields() {
    let mut form = complete();
    form.phone = "  ".to_owned();
    assert_eq!(validate_signup(&form), Err(REQUIRED_FIELDS));
}

#[test]
fn validate_signup_rejects_unlisted_region() {
    let mut form = complete();
    form.region = "Atlantis".to_owned();
    assert_eq!(validate_signup(&form), Err("Please select a region from the list."));
}

#[test]
fn toggle_forest_type_adds_then_removes() {
    let mut form = SignupForm::default();
    form.toggle_forest_type(FOREST_TYPES[1]);
    form.toggle_forest_type(FOREST_TYPES[2]);
    assert_eq!(form.forest_types, vec![FOREST_TYPES[1].to_owned(), FOREST_TYPES[2].to_owned()]);
    form.toggle_forest_type(FOREST_TYPES[1]);
    assert_eq!(form.forest_types, vec![FOREST_TYPES[2].to_owned()]);
}
