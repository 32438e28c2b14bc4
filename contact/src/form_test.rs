use super::*;

#[test]
fn from_input_name_resolves_known_fields() {
    assert_eq!(ContactField::from_input_name("name"), Some(ContactField::Name));
    assert_eq!(ContactField::from_input_name("email"), Some(ContactField::Email));
    assert_eq!(ContactField::from_input_name("message"), Some(ContactField::Message));
}

#[test]
fn from_input_name_rejects_unknown_and_case_variants() {
    assert_eq!(ContactField::from_input_name("Name"), None);
    assert_eq!(ContactField::from_input_name("phone"), None);
    assert_eq!(ContactField::from_input_name(""), None);
}

#[test]
fn input_name_matches_from_input_name() {
    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        assert_eq!(ContactField::from_input_name(field.input_name()), Some(field));
    }
}

#[test]
fn update_field_only_touches_named_field() {
    let mut state = ContactFormState::default();
    state.update_field(ContactField::Name, "Ada");
    state.update_field(ContactField::Email, "ada@x.com");

    state.update_field(ContactField::Name, "Grace");

    assert_eq!(state.name, "Grace");
    assert_eq!(state.email, "ada@x.com");
    assert_eq!(state.message, "");
}

#[test]
fn last_write_wins_per_field() {
    let mut state = ContactFormState::default();
    let edits = [
        (ContactField::Message, "h"),
        (ContactField::Name, "A"),
        (ContactField::Message, "hi"),
        (ContactField::Email, "x@"),
        (ContactField::Name, "Ad"),
        (ContactField::Message, "hi there"),
        (ContactField::Email, "x@y.z"),
    ];
    for (field, value) in edits {
        state.update_field(field, value);
    }

    assert_eq!(
        state,
        ContactFormState { name: "Ad".into(), email: "x@y.z".into(), message: "hi there".into() }
    );
}

#[test]
fn update_field_keeps_whitespace_and_malformed_email() {
    let mut state = ContactFormState::default();
    state.update_field(ContactField::Email, "  not-an-email  ");
    assert_eq!(state.field(ContactField::Email), "  not-an-email  ");
}

#[test]
fn clear_resets_every_field() {
    let mut state = ContactFormState { name: "a".into(), email: "b".into(), message: "c".into() };
    assert!(!state.is_empty());
    state.clear();
    assert!(state.is_empty());
}
