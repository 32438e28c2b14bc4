//! EmailJS send call.
//!
//! Client-side (csr): real HTTP call via `gloo-net`.
//! Native builds: returns [`DeliveryError::Unavailable`] since there is no
//! browser fetch to use.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome comes back as `Result<(), DeliveryError>` so the contact
//! section can record it on the form instead of dropping it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

use contact::{DeliveryError, EmailJsConfig, TemplateParams};

#[cfg(any(test, feature = "csr"))]
fn network_error(err: impl std::fmt::Display) -> DeliveryError {
    DeliveryError::Network(err.to_string())
}

/// Send one submission through the EmailJS REST API.
///
/// # Errors
///
/// Returns a [`DeliveryError`] when the request fails or the provider
/// responds with a non-2xx status.
pub async fn send_contact(config: &EmailJsConfig, params: &TemplateParams) -> Result<(), DeliveryError> {
    #[cfg(feature = "csr")]
    {
        let body = contact::EmailJsRequest::new(config, params);
        let resp = gloo_net::http::Request::post(&config.endpoint)
            .json(&body)
            .map_err(|e| DeliveryError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        contact::interpret_response(status, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, params);
        Err(DeliveryError::Unavailable)
    }
}
