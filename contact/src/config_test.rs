use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_nothing_set() {
    let settings = ContactSettings::from_lookup(|_| None).unwrap();
    assert_eq!(settings, ContactSettings::default());
    assert_eq!(settings.emailjs.endpoint, DEFAULT_EMAILJS_ENDPOINT);
    assert_eq!(settings.emailjs.service_id, DEFAULT_SERVICE_ID);
    assert_eq!(settings.emailjs.access_token, None);
    assert!(!settings.policy.guard_in_flight);
    assert!(settings.policy.show_feedback);
    assert!(!settings.policy.reset_on_success);
}

#[test]
fn from_lookup_applies_overrides() {
    let settings = ContactSettings::from_lookup(lookup_from(&[
        (SERVICE_ID_KEY, " svc "),
        (TEMPLATE_ID_KEY, "tpl"),
        (PUBLIC_KEY_KEY, "pub"),
        (ACCESS_TOKEN_KEY, "secret"),
        (ENDPOINT_KEY, "http://127.0.0.1:9999/send"),
        (RESET_ON_SUCCESS_KEY, "yes"),
        (GUARD_IN_FLIGHT_KEY, "on"),
        (SHOW_FEEDBACK_KEY, "FALSE"),
    ]))
    .unwrap();

    assert_eq!(
        settings.emailjs,
        EmailJsConfig {
            endpoint: "http://127.0.0.1:9999/send".into(),
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "pub".into(),
            access_token: Some("secret".into()),
        }
    );
    assert_eq!(
        settings.policy,
        SubmitPolicy { reset_on_success: true, guard_in_flight: true, show_feedback: false }
    );
}

#[test]
fn from_lookup_rejects_empty_identifier() {
    let err = ContactSettings::from_lookup(lookup_from(&[(TEMPLATE_ID_KEY, "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyValue { key: TEMPLATE_ID_KEY });
}

#[test]
fn from_lookup_treats_blank_access_token_as_none() {
    let settings = ContactSettings::from_lookup(lookup_from(&[(ACCESS_TOKEN_KEY, " ")])).unwrap();
    assert_eq!(settings.emailjs.access_token, None);
}

#[test]
fn from_lookup_rejects_bad_flag() {
    let err = ContactSettings::from_lookup(lookup_from(&[(GUARD_IN_FLIGHT_KEY, "maybe")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidFlag { key: GUARD_IN_FLIGHT_KEY, value: "maybe".into() });
}

#[test]
fn from_lookup_rejects_non_http_endpoint() {
    let err = ContactSettings::from_lookup(lookup_from(&[(ENDPOINT_KEY, "ftp://mail")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidEndpoint("ftp://mail".into()));
}
