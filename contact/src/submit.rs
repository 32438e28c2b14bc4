//! Submission controller: form state, in-flight bookkeeping, and status.
//!
//! DESIGN
//! ======
//! The controller never performs I/O. `begin_submit` returns a snapshot the
//! caller sends with whatever transport it has; `complete` takes the outcome
//! back. Only the most recently begun submission may change the visible
//! status or trigger a reset; older outcomes just release their in-flight
//! slot.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::collections::BTreeSet;

use crate::clock::Clock;
use crate::config::SubmitPolicy;
use crate::error::{DeliveryError, SubmitRejected};
use crate::form::{ContactField, ContactFormState};
use crate::wire::TemplateParams;

/// Visible state of the latest submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(DeliveryError),
}

/// Identifies one begun submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionTicket(u64);

/// A snapshot ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub params: TemplateParams,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    state: ContactFormState,
    policy: SubmitPolicy,
    status: SubmitStatus,
    outstanding: BTreeSet<SubmissionTicket>,
    next_ticket: u64,
    latest: Option<SubmissionTicket>,
}

impl ContactForm {
    #[must_use]
    pub fn new(policy: SubmitPolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    #[must_use]
    pub fn state(&self) -> &ContactFormState {
        &self.state
    }

    #[must_use]
    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    #[must_use]
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Number of submissions sent but not yet completed.
    #[cfg(test)]
    pub(crate) fn in_flight(&self) -> usize {
        self.outstanding.len()
    }

    /// True when the guard would refuse a submit right now.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.policy.guard_in_flight && !self.outstanding.is_empty()
    }

    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.state.update_field(field, value);
    }

    /// Update the field whose HTML input is called `input_name`.
    ///
    /// Returns `false` and leaves the state alone for unknown names.
    pub fn update_named(&mut self, input_name: &str, value: impl Into<String>) -> bool {
        let Some(field) = ContactField::from_input_name(input_name) else {
            return false;
        };
        self.state.update_field(field, value);
        true
    }

    /// Snapshot the current fields and mark a request as outstanding.
    ///
    /// The timestamp is read from `clock` here, not when fields were edited.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::InFlight`] when the in-flight guard is
    /// enabled and an earlier submission has not completed.
    pub fn begin_submit(&mut self, clock: &impl Clock) -> Result<PendingSubmission, SubmitRejected> {
        if self.is_locked() {
            return Err(SubmitRejected::InFlight);
        }
        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.outstanding.insert(ticket);
        self.latest = Some(ticket);
        self.status = SubmitStatus::Sending;

        let params = TemplateParams::snapshot(&self.state, clock.now_label());
        Ok(PendingSubmission { ticket, params })
    }

    /// Record the transport outcome for `ticket`.
    ///
    /// Returns `true` when the outcome became the visible status. Unknown or
    /// already-completed tickets are ignored.
    pub fn complete(&mut self, ticket: SubmissionTicket, outcome: Result<(), DeliveryError>) -> bool {
        if !self.outstanding.remove(&ticket) {
            return false;
        }
        if self.latest != Some(ticket) {
            return false;
        }
        self.status = match outcome {
            Ok(()) => {
                if self.policy.reset_on_success {
                    self.state.clear();
                }
                SubmitStatus::Sent
            }
            Err(err) => SubmitStatus::Failed(err),
        };
        true
    }
}
