//! `reqwest` transport for EmailJS sends.

#[cfg(test)]
#[path = "mailer_test.rs"]
mod mailer_test;

use std::time::Duration;

use contact::{DeliveryError, EmailJsConfig, EmailJsRequest, TemplateParams, interpret_response};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

pub struct Mailer {
    http: reqwest::Client,
    config: EmailJsConfig,
}

impl Mailer {
    /// Build a mailer with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest` error if the client cannot be built.
    pub fn new(config: EmailJsConfig, timeouts: Timeouts) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &EmailJsConfig {
        &self.config
    }

    /// Post one submission to the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Network`] if no response arrives, otherwise
    /// the error chosen by [`interpret_response`].
    pub async fn send(&self, params: &TemplateParams) -> Result<(), DeliveryError> {
        let body = EmailJsRequest::new(&self.config, params);
        let resp = self
            .http
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let text = resp.text().await.unwrap_or_default();
        tracing::debug!(status, body = %text, "emailjs response");
        interpret_response(status, &text)
    }
}
