use super::*;

#[test]
fn resolve_uses_lookup_values() {
    let settings = resolve(|key| (key == SERVICE_ID_KEY).then(|| "svc_custom".to_owned()));
    assert_eq!(settings.emailjs.service_id, "svc_custom");
}

#[test]
fn resolve_falls_back_to_defaults_on_invalid_value() {
    let settings = resolve(|key| (key == SHOW_FEEDBACK_KEY).then(|| "sometimes".to_owned()));
    assert_eq!(settings, ContactSettings::default());
}

#[test]
fn compile_time_value_ignores_unknown_keys() {
    assert_eq!(compile_time_value("PORTFOLIO_UNKNOWN"), None);
}
