use super::*;
use httpmock::prelude::*;
use serde_json::Value;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("contact-cli").chain(args.iter().copied())).unwrap()
}

fn message(name: &str, email: &str, message: &str) -> MessageArgs {
    MessageArgs { name: name.into(), email: email.into(), message: message.into() }
}

#[test]
fn flags_override_default_identifiers() {
    let cli = parse(&["--service-id", "svc", "--access-token", "priv", "preview", "--name", "Ada"]);
    let settings = cli.settings().unwrap();
    assert_eq!(settings.emailjs.service_id, "svc");
    assert_eq!(settings.emailjs.access_token.as_deref(), Some("priv"));
    assert_eq!(settings.emailjs.template_id, contact::config::DEFAULT_TEMPLATE_ID);
}

#[test]
fn empty_identifier_flag_is_config_error() {
    let cli = parse(&["--public-key", "", "preview"]);
    assert_eq!(cli.settings().unwrap_err(), ConfigError::EmptyValue { key: PUBLIC_KEY_KEY });
}

#[test]
fn message_args_default_to_empty_strings() {
    let cli = parse(&["send"]);
    let Command::Send(args) = cli.command else {
        panic!("expected send");
    };
    let form = form_from_args(&args);
    assert!(form.state().is_empty());
}

#[test]
fn preview_renders_request_body() {
    let settings = ContactSettings::default();
    let json = preview(&settings, &message("Ada", "ada@x.com", "")).unwrap();
    let body: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(body["service_id"], "portfolio_service");
    assert_eq!(body["template_params"]["name"], "Ada");
    assert_eq!(body["template_params"]["message"], "");
    assert!(!body["template_params"]["time"].as_str().unwrap().is_empty());
    assert!(body.get("accessToken").is_none());
}

#[tokio::test]
async fn send_succeeds_on_ok_response() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/send").body_contains("\"name\":\"Ada\"");
            then.status(200).body("OK");
        })
        .await;
    let config = contact::EmailJsConfig { endpoint: server.url("/send"), ..contact::EmailJsConfig::default() };
    let mailer = Mailer::new(config, Timeouts::default()).unwrap();

    send(&mailer, &message("Ada", "ada@x.com", "hello")).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn send_surfaces_provider_rejection() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/send");
            then.status(500).body("Internal error");
        })
        .await;
    let config = contact::EmailJsConfig { endpoint: server.url("/send"), ..contact::EmailJsConfig::default() };
    let mailer = Mailer::new(config, Timeouts::default()).unwrap();

    let err = send(&mailer, &message("", "", "")).await.unwrap_err();

    assert!(matches!(
        err,
        CliError::Delivery(DeliveryError::Rejected { status: 500, ref message }) if message == "Internal error"
    ));
}
