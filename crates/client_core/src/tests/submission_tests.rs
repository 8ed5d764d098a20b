use super::*;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;

use crate::config::CredentialKey;

struct TestRelay {
    fail_with: Option<u16>,
    calls: AtomicUsize,
    requests: Mutex<Vec<RelayRequest>>,
}

impl TestRelay {
    fn ok() -> Self {
        Self {
            fail_with: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn rejecting(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::ok()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Relay for TestRelay {
    async fn send(&self, request: &RelayRequest) -> Result<(), RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        match self.fail_with {
            Some(status) => Err(RelayError::Rejected {
                status,
                body: "relay said no".to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn full_credentials() -> HashMap<CredentialKey, String> {
    HashMap::from([
        (CredentialKey::ServiceId, "service_1".to_string()),
        (CredentialKey::TemplateId, "template_1".to_string()),
        (CredentialKey::PublicKey, "public_1".to_string()),
    ])
}

fn no_credentials() -> HashMap<CredentialKey, String> {
    HashMap::new()
}

fn filled_form() -> ContactForm {
    ContactForm::new("Ada", "ada@example.com", "How can we collaborate?")
}

fn drain(rx: &mut broadcast::Receiver<SubmissionStatus>) -> Vec<SubmissionStatus> {
    let mut seen = Vec::new();
    while let Ok(status) = rx.try_recv() {
        seen.push(status);
    }
    seen
}

#[tokio::test]
async fn successful_delivery_moves_to_success_and_clears_form() {
    let mut controller = SubmissionController::new();
    let mut rx = controller.subscribe();
    let mut form = filled_form();
    let relay = TestRelay::ok();

    assert_eq!(controller.status(), SubmissionStatus::Idle);
    let status = controller
        .submit(&mut form, &full_credentials(), &relay)
        .await
        .expect("submit accepted");

    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(
        drain(&mut rx),
        vec![SubmissionStatus::Sending, SubmissionStatus::Success]
    );
    assert!(form.is_empty());
    assert_eq!(relay.calls(), 1);
    assert!(!controller.is_sending());
}

#[tokio::test]
async fn request_carries_form_fields_and_credentials() {
    let mut controller = SubmissionController::new();
    let mut form = filled_form();
    let relay = TestRelay::ok();

    controller
        .submit(&mut form, &full_credentials(), &relay)
        .await
        .expect("submit accepted");

    let requests = relay.requests.lock().expect("requests lock");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].payload.user_name, "Ada");
    assert_eq!(requests[0].payload.user_email, "ada@example.com");
    assert_eq!(requests[0].payload.message, "How can we collaborate?");
    assert_eq!(requests[0].credentials.service_id, "service_1");
    assert_eq!(requests[0].credentials.template_id, "template_1");
    assert_eq!(requests[0].credentials.public_key, "public_1");
}

#[test]
fn padded_email_goes_out_trimmed() {
    let mut controller = SubmissionController::new();
    let form = ContactForm::new("Ada", "  ada@example.com ", "hi");

    let Submission::Dispatched(pending) = controller
        .begin(&form, &full_credentials())
        .expect("submit accepted")
    else {
        panic!("expected dispatch");
    };

    let wire = pending.request.to_wire();
    assert_eq!(wire.template_params.user_email, "ada@example.com");
    assert_eq!(wire.template_params.user_name, "Ada");
    assert_eq!(form.user_email, "  ada@example.com ");
}

#[tokio::test]
async fn missing_credential_errors_without_calling_relay() {
    for key in CredentialKey::ALL {
        let mut credentials = full_credentials();
        credentials.remove(&key);

        let mut controller = SubmissionController::new();
        let mut rx = controller.subscribe();
        let mut form = filled_form();
        let relay = TestRelay::ok();

        let status = controller
            .submit(&mut form, &credentials, &relay)
            .await
            .expect("submit accepted");

        assert_eq!(status, SubmissionStatus::Error, "missing {key:?}");
        assert_eq!(
            drain(&mut rx),
            vec![SubmissionStatus::Sending, SubmissionStatus::Error]
        );
        assert_eq!(relay.calls(), 0);
        assert_eq!(form, filled_form());
        assert!(!controller.is_sending());
    }
}

#[test]
fn missing_configuration_is_reported_as_failed_submission() {
    let mut controller = SubmissionController::new();
    let form = filled_form();

    let submission = controller
        .begin(&form, &no_credentials())
        .expect("submit accepted");
    match submission {
        Submission::Failed(err) => {
            assert_eq!(err.kind(), "configuration");
            assert!(err.to_string().contains("EMAILJS_SERVICE_ID"));
        }
        Submission::Dispatched(_) => panic!("nothing should be dispatched"),
    }
    assert_eq!(controller.status(), SubmissionStatus::Error);
}

#[tokio::test]
async fn relay_fault_moves_to_error_and_keeps_form() {
    let mut controller = SubmissionController::new();
    let mut rx = controller.subscribe();
    let mut form = filled_form();
    let relay = TestRelay::rejecting(503);

    let status = controller
        .submit(&mut form, &full_credentials(), &relay)
        .await
        .expect("submit accepted");

    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(
        drain(&mut rx),
        vec![SubmissionStatus::Sending, SubmissionStatus::Error]
    );
    assert_eq!(form, filled_form());
    assert_eq!(relay.calls(), 1);
}

#[tokio::test]
async fn consecutive_submits_report_only_the_latest_attempt() {
    let mut controller = SubmissionController::new();
    let mut rx = controller.subscribe();
    let mut form = filled_form();

    let failing = TestRelay::rejecting(500);
    let first = controller
        .submit(&mut form, &full_credentials(), &failing)
        .await
        .expect("first submit");
    assert_eq!(first, SubmissionStatus::Error);

    let working = TestRelay::ok();
    let second = controller
        .submit(&mut form, &full_credentials(), &working)
        .await
        .expect("second submit");
    assert_eq!(second, SubmissionStatus::Success);
    assert_eq!(controller.status(), SubmissionStatus::Success);

    assert_eq!(
        drain(&mut rx),
        vec![
            SubmissionStatus::Sending,
            SubmissionStatus::Error,
            SubmissionStatus::Sending,
            SubmissionStatus::Success,
        ]
    );
    assert_eq!(failing.calls(), 1);
    assert_eq!(working.calls(), 1);

    let mut refilled = filled_form();
    let third = controller
        .submit(&mut refilled, &no_credentials(), &working)
        .await
        .expect("third submit");
    assert_eq!(third, SubmissionStatus::Error);
    assert_eq!(working.calls(), 1);
}

#[test]
fn second_submit_while_sending_is_rejected() {
    let mut controller = SubmissionController::new();
    let form = filled_form();

    let first = controller
        .begin(&form, &full_credentials())
        .expect("first submit accepted");
    assert!(matches!(first, Submission::Dispatched(_)));
    assert_eq!(controller.status(), SubmissionStatus::Sending);

    let mut rx = controller.subscribe();
    let second = controller.begin(&form, &full_credentials());
    assert_eq!(second.err(), Some(SubmitRejected::InFlight));
    assert_eq!(controller.status(), SubmissionStatus::Sending);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn stale_outcome_is_ignored() {
    let mut controller = SubmissionController::new();
    let mut form = filled_form();

    let Submission::Dispatched(pending) = controller
        .begin(&form, &full_credentials())
        .expect("submit accepted")
    else {
        panic!("expected dispatch");
    };

    assert!(!controller.complete(AttemptId(pending.attempt.0 + 7), Ok(()), &mut form));
    assert_eq!(controller.status(), SubmissionStatus::Sending);
    assert_eq!(form, filled_form());

    assert!(controller.complete(pending.attempt, Ok(()), &mut form));
    assert_eq!(controller.status(), SubmissionStatus::Success);
    assert!(!controller.complete(pending.attempt, Ok(()), &mut form));
}

#[test]
fn attempts_are_numbered_per_accepted_submit() {
    let mut controller = SubmissionController::new();
    let mut form = filled_form();

    let mut attempts = Vec::new();
    for _ in 0..2 {
        let Submission::Dispatched(pending) = controller
            .begin(&form, &full_credentials())
            .expect("submit accepted")
        else {
            panic!("expected dispatch");
        };
        attempts.push(pending.attempt);
        controller.complete(
            pending.attempt,
            Err(RelayError::Rejected {
                status: 400,
                body: String::new(),
            }),
            &mut form,
        );
    }
    assert_ne!(attempts[0], attempts[1]);
}

#[test]
fn incomplete_form_is_rejected_before_sending() {
    let mut controller = SubmissionController::new();
    let mut rx = controller.subscribe();

    let cases = [
        (
            ContactForm::new("", "ada@example.com", "hi"),
            SubmitRejected::MissingField(FormField::UserName),
        ),
        (
            ContactForm::new("Ada", "  ", "hi"),
            SubmitRejected::MissingField(FormField::UserEmail),
        ),
        (
            ContactForm::new("Ada", "ada@example.com", ""),
            SubmitRejected::MissingField(FormField::Message),
        ),
        (
            ContactForm::new("Ada", "ada.example.com", "hi"),
            SubmitRejected::InvalidEmail,
        ),
        (
            ContactForm::new("Ada", "ada@", "hi"),
            SubmitRejected::InvalidEmail,
        ),
        (
            ContactForm::new("Ada", "a da@example.com", "hi"),
            SubmitRejected::InvalidEmail,
        ),
    ];

    for (form, expected) in cases {
        let result = controller.begin(&form, &full_credentials());
        assert_eq!(result.err(), Some(expected));
    }
    assert_eq!(controller.status(), SubmissionStatus::Idle);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn reset_clears_every_field() {
    let mut form = filled_form();
    form.field_mut(FormField::Message).push_str(" Soon?");
    assert!(form.message.ends_with("Soon?"));

    form.reset();
    assert!(form.is_empty());
}
