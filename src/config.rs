//! Contact settings baked in at compile time.
//!
//! The browser has no process environment, so each key is captured with
//! `option_env!` when the WASM bundle is built.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use contact::config::{
    ACCESS_TOKEN_KEY, ENDPOINT_KEY, GUARD_IN_FLIGHT_KEY, PUBLIC_KEY_KEY, RESET_ON_SUCCESS_KEY, SERVICE_ID_KEY,
    SHOW_FEEDBACK_KEY, TEMPLATE_ID_KEY,
};
use contact::{ConfigError, ContactSettings};

fn compile_time_value(key: &str) -> Option<&'static str> {
    match key {
        SERVICE_ID_KEY => option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
        TEMPLATE_ID_KEY => option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
        PUBLIC_KEY_KEY => option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
        ACCESS_TOKEN_KEY => option_env!("PORTFOLIO_EMAILJS_ACCESS_TOKEN"),
        ENDPOINT_KEY => option_env!("PORTFOLIO_EMAILJS_ENDPOINT"),
        RESET_ON_SUCCESS_KEY => option_env!("PORTFOLIO_CONTACT_RESET_ON_SUCCESS"),
        GUARD_IN_FLIGHT_KEY => option_env!("PORTFOLIO_CONTACT_GUARD_IN_FLIGHT"),
        SHOW_FEEDBACK_KEY => option_env!("PORTFOLIO_CONTACT_SHOW_FEEDBACK"),
        _ => None,
    }
}

/// Resolve settings, falling back to defaults if a baked-in value is invalid.
pub fn load() -> ContactSettings {
    resolve(|key| compile_time_value(key).map(str::to_owned))
}

fn resolve<F>(lookup: F) -> ContactSettings
where
    F: Fn(&str) -> Option<String>,
{
    ContactSettings::from_lookup(lookup).unwrap_or_else(|err| {
        report_invalid(&err);
        ContactSettings::default()
    })
}

fn report_invalid(err: &ConfigError) {
    #[cfg(feature = "csr")]
    log::warn!("invalid contact settings, using defaults: {err}");
    #[cfg(not(feature = "csr"))]
    let _ = err;
}
