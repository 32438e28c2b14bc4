//! Contact-form model and EmailJS wire schema shared by `portfolio` and `cli`.
//!
//! This crate owns everything about a contact submission that does not depend
//! on where it runs: the editable form state, the submission controller with
//! its in-flight guard, the request body sent to EmailJS, and the mapping from
//! HTTP responses to [`DeliveryError`]. Transports live in the callers
//! (`gloo-net` in the browser app, `reqwest` in the CLI).
//!
//! SUBMISSION LIFECYCLE
//! ====================
//! [`ContactForm::begin_submit`] snapshots the state into a
//! [`PendingSubmission`]; the caller sends it and hands the outcome back via
//! [`ContactForm::complete`].

pub mod clock;
pub mod config;
pub mod error;
pub mod form;
pub mod submit;
pub mod wire;

pub use clock::Clock;
#[cfg(not(target_arch = "wasm32"))]
pub use clock::SystemClock;
pub use config::{ContactSettings, EmailJsConfig, SubmitPolicy};
pub use error::{ConfigError, DeliveryError, SubmitRejected};
pub use form::{ContactField, ContactFormState};
pub use submit::{ContactForm, PendingSubmission, SubmissionTicket, SubmitStatus};
pub use wire::{EmailJsRequest, TemplateParams, interpret_response};
