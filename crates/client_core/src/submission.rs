//! Contact form submission state machine.
//!
//! A submit moves the controller from any non-sending status to `Sending`,
//! then to exactly one terminal status: `Error` when credentials are absent
//! (no relay call is made) or when the relay faults, `Success` otherwise.
//! The synchronous half (`begin`) and the outcome half (`complete`) are split
//! so a GUI thread can hand the relay call to a background worker.

use shared::domain::{FormField, FormPayload, SubmissionStatus};
use tokio::sync::broadcast;
use tracing::{error, info, warn};

use crate::{
    config::{CredentialSource, RelayCredentials},
    error::{ContactError, RelayError, SubmitRejected},
    relay::{Relay, RelayRequest},
};

const STATUS_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(pub u64);

/// Mutable form handle: the three named inputs plus reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        user_name: impl Into<String>,
        user_email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            user_email: user_email.into(),
            message: message.into(),
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::UserName => &mut self.user_name,
            FormField::UserEmail => &mut self.user_email,
            FormField::Message => &mut self.message,
        }
    }

    /// Snapshot for the relay. The address goes out trimmed, as an email input yields it.
    pub fn payload(&self) -> FormPayload {
        FormPayload {
            user_name: self.user_name.clone(),
            user_email: self.user_email.trim().to_string(),
            message: self.message.clone(),
        }
    }

    pub fn reset(&mut self) {
        self.user_name.clear();
        self.user_email.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.user_name.is_empty() && self.user_email.is_empty() && self.message.is_empty()
    }

    pub fn validate(&self) -> Result<(), SubmitRejected> {
        for (field, value) in [
            (FormField::UserName, &self.user_name),
            (FormField::UserEmail, &self.user_email),
            (FormField::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SubmitRejected::MissingField(field));
            }
        }

        if !looks_like_email(self.user_email.trim()) {
            return Err(SubmitRejected::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelivery {
    pub attempt: AttemptId,
    pub request: RelayRequest,
}

#[derive(Debug)]
pub enum Submission {
    /// Status is `Sending`; hand the request to the relay.
    Dispatched(PendingDelivery),
    /// Status is already `Error`; nothing was sent.
    Failed(ContactError),
}

pub struct SubmissionController {
    status: SubmissionStatus,
    next_attempt: u64,
    in_flight: Option<AttemptId>,
    events: broadcast::Sender<SubmissionStatus>,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionController {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(STATUS_CHANNEL_CAPACITY);
        Self {
            status: SubmissionStatus::Idle,
            next_attempt: 0,
            in_flight: None,
            events,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Every transition, in order, from the moment of subscription.
    pub fn subscribe(&self) -> broadcast::Receiver<SubmissionStatus> {
        self.events.subscribe()
    }

    pub fn begin(
        &mut self,
        form: &ContactForm,
        credentials: &dyn CredentialSource,
    ) -> Result<Submission, SubmitRejected> {
        if self.in_flight.is_some() {
            warn!("ignoring submit while a relay call is in flight");
            return Err(SubmitRejected::InFlight);
        }
        form.validate()?;

        let attempt = AttemptId(self.next_attempt);
        self.next_attempt += 1;
        self.transition(SubmissionStatus::Sending);

        let credentials = match RelayCredentials::resolve(credentials) {
            Ok(credentials) => credentials,
            Err(err) => {
                error!(attempt = attempt.0, kind = err.kind(), "{err}");
                self.transition(SubmissionStatus::Error);
                return Ok(Submission::Failed(err));
            }
        };

        self.in_flight = Some(attempt);
        Ok(Submission::Dispatched(PendingDelivery {
            attempt,
            request: RelayRequest {
                credentials,
                payload: form.payload(),
            },
        }))
    }

    /// Applies the relay outcome; returns false for an attempt that is not in flight.
    pub fn complete(
        &mut self,
        attempt: AttemptId,
        outcome: Result<(), RelayError>,
        form: &mut ContactForm,
    ) -> bool {
        if self.in_flight != Some(attempt) {
            warn!(attempt = attempt.0, "dropping outcome for stale relay attempt");
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(()) => {
                info!(attempt = attempt.0, "contact message delivered");
                form.reset();
                self.transition(SubmissionStatus::Success);
            }
            Err(err) => {
                let err = ContactError::from(err);
                error!(attempt = attempt.0, kind = err.kind(), "{err}");
                self.transition(SubmissionStatus::Error);
            }
        }
        true
    }

    /// One full submit: exactly one relay call when credentials are present.
    pub async fn submit(
        &mut self,
        form: &mut ContactForm,
        credentials: &dyn CredentialSource,
        relay: &dyn Relay,
    ) -> Result<SubmissionStatus, SubmitRejected> {
        match self.begin(form, credentials)? {
            Submission::Failed(_) => {}
            Submission::Dispatched(pending) => {
                let outcome = relay.send(&pending.request).await;
                self.complete(pending.attempt, outcome, form);
            }
        }
        Ok(self.status)
    }

    fn transition(&mut self, next: SubmissionStatus) {
        tracing::debug!(from = ?self.status, to = ?next, "submission status changed");
        self.status = next;
        let _ = self.events.send(next);
    }
}

#[cfg(test)]
#[path = "tests/submission_tests.rs"]
mod tests;
