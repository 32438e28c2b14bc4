//! EmailJS REST request body and response interpretation.
//!
//! The provider accepts `POST /api/v1.0/email/send` with a JSON body naming
//! the service, template, and public key, plus the template variables. It
//! answers with a plain-text body: `OK` on success, a short reason otherwise.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::Serialize;

use crate::config::EmailJsConfig;
use crate::error::DeliveryError;
use crate::form::ContactFormState;

/// Template variables rendered by the EmailJS template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Locale-style submission time, captured when the submit happened.
    pub time: String,
}

impl TemplateParams {
    #[must_use]
    pub fn snapshot(state: &ContactFormState, time: String) -> Self {
        Self {
            name: state.name.clone(),
            email: state.email.clone(),
            message: state.message.clone(),
            time,
        }
    }
}

/// Body of an EmailJS send call.
#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// EmailJS still calls the public key `user_id` on the wire.
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
}

impl<'a> EmailJsRequest<'a> {
    #[must_use]
    pub fn new(config: &'a EmailJsConfig, params: &'a TemplateParams) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: params,
            access_token: config.access_token.as_deref(),
        }
    }

    /// Serialize to the JSON string posted to the provider.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, DeliveryError> {
        serde_json::to_string(self).map_err(|e| DeliveryError::Encode(e.to_string()))
    }
}

const EMPTY_BODY_MESSAGE: &str = "no response body";

/// Map a provider response to a delivery outcome.
///
/// # Errors
///
/// Returns the [`DeliveryError`] variant matching the status and body.
pub fn interpret_response(status: u16, body: &str) -> Result<(), DeliveryError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = response_message(body);
    Err(match status {
        401 | 403 => DeliveryError::InvalidCredentials { status, message },
        429 => DeliveryError::RateLimited { message },
        400 if mentions_invalid_identifier(&message) => DeliveryError::InvalidCredentials { status, message },
        _ => DeliveryError::Rejected { status, message },
    })
}

fn response_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        EMPTY_BODY_MESSAGE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn mentions_invalid_identifier(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    let names_identifier = ["service id", "template id", "user id", "public key", "access token"]
        .iter()
        .any(|needle| lower.contains(needle));
    names_identifier && lower.contains("invalid")
}
