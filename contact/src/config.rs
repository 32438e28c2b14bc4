//! EmailJS identifiers and submit behavior, resolved from key/value lookups.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_SERVICE_ID: &str = "portfolio_service";
pub const DEFAULT_TEMPLATE_ID: &str = "template_o45id24";
pub const DEFAULT_PUBLIC_KEY: &str = "uICL2cvobLvXtSnfT";

pub const SERVICE_ID_KEY: &str = "PORTFOLIO_EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_KEY: &str = "PORTFOLIO_EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_KEY: &str = "PORTFOLIO_EMAILJS_PUBLIC_KEY";
pub const ACCESS_TOKEN_KEY: &str = "PORTFOLIO_EMAILJS_ACCESS_TOKEN";
pub const ENDPOINT_KEY: &str = "PORTFOLIO_EMAILJS_ENDPOINT";
pub const RESET_ON_SUCCESS_KEY: &str = "PORTFOLIO_CONTACT_RESET_ON_SUCCESS";
pub const GUARD_IN_FLIGHT_KEY: &str = "PORTFOLIO_CONTACT_GUARD_IN_FLIGHT";
pub const SHOW_FEEDBACK_KEY: &str = "PORTFOLIO_CONTACT_SHOW_FEEDBACK";

/// Identifiers addressing one EmailJS template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Private key, required by EmailJS for calls from non-browser clients.
    pub access_token: Option<String>,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_owned(),
            service_id: DEFAULT_SERVICE_ID.to_owned(),
            template_id: DEFAULT_TEMPLATE_ID.to_owned(),
            public_key: DEFAULT_PUBLIC_KEY.to_owned(),
            access_token: None,
        }
    }
}

/// What the form does around a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitPolicy {
    /// Clear all fields after the provider accepts the latest submission.
    pub reset_on_success: bool,
    /// Refuse a submit while an earlier one is still outstanding. Off by
    /// default: overlapping submits each send their own snapshot.
    pub guard_in_flight: bool,
    /// Show sending/sent/failed text next to the form.
    pub show_feedback: bool,
}

impl Default for SubmitPolicy {
    fn default() -> Self {
        Self { reset_on_success: false, guard_in_flight: false, show_feedback: true }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSettings {
    pub emailjs: EmailJsConfig,
    pub policy: SubmitPolicy,
}

impl ContactSettings {
    /// Build settings from a key lookup; absent keys fall back to defaults.
    ///
    /// Keys:
    /// - `PORTFOLIO_EMAILJS_SERVICE_ID`, `PORTFOLIO_EMAILJS_TEMPLATE_ID`,
    ///   `PORTFOLIO_EMAILJS_PUBLIC_KEY`: must be non-empty when present
    /// - `PORTFOLIO_EMAILJS_ACCESS_TOKEN`: empty means none
    /// - `PORTFOLIO_EMAILJS_ENDPOINT`: http(s) URL
    /// - `PORTFOLIO_CONTACT_RESET_ON_SUCCESS`, `PORTFOLIO_CONTACT_GUARD_IN_FLIGHT`,
    ///   `PORTFOLIO_CONTACT_SHOW_FEEDBACK`: booleans
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for empty identifiers, unparseable flags, or a
    /// non-http endpoint.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = EmailJsConfig::default();
        let endpoint = match lookup(ENDPOINT_KEY) {
            Some(raw) => parse_endpoint(&raw)?,
            None => defaults.endpoint,
        };
        let emailjs = EmailJsConfig {
            endpoint,
            service_id: required(&lookup, SERVICE_ID_KEY, defaults.service_id)?,
            template_id: required(&lookup, TEMPLATE_ID_KEY, defaults.template_id)?,
            public_key: required(&lookup, PUBLIC_KEY_KEY, defaults.public_key)?,
            access_token: lookup(ACCESS_TOKEN_KEY)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty()),
        };

        let base = SubmitPolicy::default();
        let policy = SubmitPolicy {
            reset_on_success: flag(&lookup, RESET_ON_SUCCESS_KEY, base.reset_on_success)?,
            guard_in_flight: flag(&lookup, GUARD_IN_FLIGHT_KEY, base.guard_in_flight)?,
            show_feedback: flag(&lookup, SHOW_FEEDBACK_KEY, base.show_feedback)?,
        };

        Ok(Self { emailjs, policy })
    }
}

fn required<F>(lookup: &F, key: &'static str, default: String) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => {
            let value = raw.trim();
            if value.is_empty() {
                return Err(ConfigError::EmptyValue { key });
            }
            Ok(value.to_owned())
        }
        None => Ok(default),
    }
}

fn flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value: raw }),
    }
}

fn parse_endpoint(raw: &str) -> Result<String, ConfigError> {
    let value = raw.trim();
    if value.starts_with("https://") || value.starts_with("http://") {
        Ok(value.to_owned())
    } else {
        Err(ConfigError::InvalidEndpoint(raw.to_owned()))
    }
}
