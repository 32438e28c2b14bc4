use super::*;
use serde_json::{Value, json};

fn params() -> TemplateParams {
    TemplateParams {
        name: "Ada".into(),
        email: "ada@x.com".into(),
        message: String::new(),
        time: "7/4/2025, 3:04:05 PM".into(),
    }
}

#[test]
fn request_serializes_to_emailjs_schema() {
    let config = EmailJsConfig::default();
    let params = params();
    let body: Value = serde_json::from_str(&EmailJsRequest::new(&config, &params).to_json().unwrap()).unwrap();

    assert_eq!(
        body,
        json!({
            "service_id": "portfolio_service",
            "template_id": "template_o45id24",
            "user_id": "uICL2cvobLvXtSnfT",
            "template_params": {
                "name": "Ada",
                "email": "ada@x.com",
                "message": "",
                "time": "7/4/2025, 3:04:05 PM"
            }
        })
    );
}

#[test]
fn request_includes_access_token_when_configured() {
    let config = EmailJsConfig { access_token: Some("private".into()), ..EmailJsConfig::default() };
    let params = params();
    let body: Value = serde_json::from_str(&EmailJsRequest::new(&config, &params).to_json().unwrap()).unwrap();
    assert_eq!(body["accessToken"], "private");
}

#[test]
fn snapshot_copies_state_without_transformation() {
    let state = ContactFormState { name: " Ada ".into(), email: "ADA@X.COM".into(), message: "\nhi\n".into() };
    let params = TemplateParams::snapshot(&state, "now".into());
    assert_eq!(params.name, " Ada ");
    assert_eq!(params.email, "ADA@X.COM");
    assert_eq!(params.message, "\nhi\n");
    assert_eq!(params.time, "now");
}

#[test]
fn interpret_response_accepts_2xx() {
    assert_eq!(interpret_response(200, "OK"), Ok(()));
    assert_eq!(interpret_response(204, ""), Ok(()));
}

#[test]
fn interpret_response_maps_auth_statuses_to_credentials() {
    assert_eq!(
        interpret_response(403, "API calls are disabled for non-browser applications"),
        Err(DeliveryError::InvalidCredentials {
            status: 403,
            message: "API calls are disabled for non-browser applications".into()
        })
    );
}

#[test]
fn interpret_response_detects_invalid_identifier_on_400() {
    assert_eq!(
        interpret_response(400, "The Public Key is invalid. To find this ID, visit ..."),
        Err(DeliveryError::InvalidCredentials {
            status: 400,
            message: "The Public Key is invalid. To find this ID, visit ...".into()
        })
    );
    assert_eq!(
        interpret_response(400, "The template ID is invalid"),
        Err(DeliveryError::InvalidCredentials { status: 400, message: "The template ID is invalid".into() })
    );
}

#[test]
fn interpret_response_other_400_is_rejection() {
    assert_eq!(
        interpret_response(400, "The template params are too big"),
        Err(DeliveryError::Rejected { status: 400, message: "The template params are too big".into() })
    );
}

#[test]
fn interpret_response_maps_429_to_rate_limited() {
    assert_eq!(
        interpret_response(429, "Too Many Requests"),
        Err(DeliveryError::RateLimited { message: "Too Many Requests".into() })
    );
}

#[test]
fn interpret_response_substitutes_empty_body() {
    assert_eq!(
        interpret_response(502, "  "),
        Err(DeliveryError::Rejected { status: 502, message: "no response body".into() })
    );
}
