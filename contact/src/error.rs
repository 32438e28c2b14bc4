//! Error types for delivery, submission, and configuration.

/// Failure to hand a message to the email provider.
///
/// `Clone + PartialEq` so the error can sit inside reactive UI state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The request never produced a response (DNS, TLS, CORS, offline).
    #[error("network error: {0}")]
    Network(String),
    /// The provider refused the service, template, or key identifiers.
    #[error("provider rejected credentials ({status}): {message}")]
    InvalidCredentials { status: u16, message: String },
    /// The provider is throttling requests.
    #[error("rate limited: {message}")]
    RateLimited { message: String },
    /// Any other non-success response.
    #[error("provider rejected message ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// No transport is compiled into this build.
    #[error("email delivery is not available in this build")]
    Unavailable,
}

/// A submit the controller refused before any request was built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a message is already being sent")]
    InFlight,
}

/// Invalid contact configuration value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must not be empty")]
    EmptyValue { key: &'static str },
    #[error("{key} must be true or false, got '{value}'")]
    InvalidFlag { key: &'static str, value: String },
    #[error("endpoint must be an http(s) URL, got '{0}'")]
    InvalidEndpoint(String),
}
