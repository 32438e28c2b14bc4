//! View helpers for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact section keeps a `RwSignal<ContactForm>`; these helpers turn
//! the controller's status and policy into feedback text, a modifier class,
//! and the submit button's label and disabled flag.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use contact::{ContactForm, SubmitStatus};

pub const SENDING_MESSAGE: &str = "Sending your message...";
pub const SENT_MESSAGE: &str = "Message sent. Thanks for reaching out!";

/// Status text under the form, or `None` when nothing should be shown.
pub fn feedback_message(form: &ContactForm) -> Option<String> {
    if !form.policy().show_feedback {
        return None;
    }
    match form.status() {
        SubmitStatus::Idle => None,
        SubmitStatus::Sending => Some(SENDING_MESSAGE.to_owned()),
        SubmitStatus::Sent => Some(SENT_MESSAGE.to_owned()),
        SubmitStatus::Failed(err) => Some(format!("Message could not be sent: {err}")),
    }
}

/// BEM modifier for the feedback line.
pub fn feedback_class(status: &SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Idle => "contact-form__feedback",
        SubmitStatus::Sending => "contact-form__feedback contact-form__feedback--sending",
        SubmitStatus::Sent => "contact-form__feedback contact-form__feedback--sent",
        SubmitStatus::Failed(_) => "contact-form__feedback contact-form__feedback--failed",
    }
}

pub fn submit_label(form: &ContactForm) -> &'static str {
    if form.is_locked() && form.policy().show_feedback { "SENDING..." } else { "SEND" }
}

pub fn submit_disabled(form: &ContactForm) -> bool {
    form.is_locked()
}
