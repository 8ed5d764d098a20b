//! Relay worker: a thread owning a tokio runtime that performs relay calls
//! queued by the page and reports each outcome back as a `UiEvent`.

use std::{sync::Arc, thread};

use client_core::{EmailJsRelay, Relay, RelayError};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn spawn_backend_thread(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    relay_endpoint: String,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "relay worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build relay runtime: {err}");
                return;
            }
        };

        let relay: Option<Arc<dyn Relay>> = match EmailJsRelay::new(&relay_endpoint) {
            Ok(relay) => {
                tracing::info!(endpoint = %relay.endpoint(), "relay worker ready");
                Some(Arc::new(relay))
            }
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "relay worker startup failure: {err:#}"
                )));
                tracing::error!("relay client unavailable: {err:#}");
                None
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::DeliverContact { attempt, request } => {
                        let Some(relay) = relay.clone() else {
                            let _ = ui_tx.try_send(UiEvent::ContactDelivery {
                                attempt,
                                outcome: Err(RelayError::Unavailable(format!(
                                    "invalid relay endpoint '{relay_endpoint}'"
                                ))),
                            });
                            continue;
                        };

                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let outcome = relay.send(&request).await;
                            let _ = ui_tx.try_send(UiEvent::ContactDelivery { attempt, outcome });
                        });
                    }
                }
            }
            tracing::debug!("relay worker command queue closed");
        });
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use client_core::{AttemptId, RelayCredentials, RelayRequest};
    use crossbeam_channel::bounded;
    use shared::{domain::FormPayload, protocol::SendEmailRequest};
    use tokio::net::TcpListener;

    use super::*;

    async fn reply_with(
        State(reply): State<StatusCode>,
        Json(body): Json<SendEmailRequest>,
    ) -> (StatusCode, &'static str) {
        if body.user_id != "public_1" {
            return (StatusCode::UNPROCESSABLE_ENTITY, "wrong public key");
        }
        let text = if reply.is_success() {
            "OK"
        } else {
            "The Public Key is invalid"
        };
        (reply, text)
    }

    fn spawn_mock_relay(server: &tokio::runtime::Runtime, reply: StatusCode) -> String {
        server.block_on(async move {
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind mock relay");
            let addr = listener.local_addr().expect("mock relay addr");
            let app = Router::new()
                .route("/api/v1.0/email/send", post(reply_with))
                .with_state(reply);
            tokio::spawn(async move {
                let _ = axum::serve(listener, app).await;
            });
            format!("http://{addr}/api/v1.0/email/send")
        })
    }

    fn deliver_through_worker(endpoint: String, attempt: AttemptId) -> Result<(), RelayError> {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(4);
        let worker = spawn_backend_thread(cmd_rx, ui_tx, endpoint);

        cmd_tx
            .send(BackendCommand::DeliverContact {
                attempt,
                request: request(),
            })
            .expect("queue command");

        let outcome = match ui_rx
            .recv_timeout(Duration::from_secs(10))
            .expect("worker event")
        {
            UiEvent::ContactDelivery {
                attempt: reported,
                outcome,
            } => {
                assert_eq!(reported, attempt);
                outcome
            }
            UiEvent::Info(message) => panic!("unexpected worker notice: {message}"),
        };

        drop(cmd_tx);
        worker.join().expect("worker exits once the queue closes");
        outcome
    }

    fn request() -> RelayRequest {
        RelayRequest {
            credentials: RelayCredentials {
                service_id: "service_1".to_string(),
                template_id: "template_1".to_string(),
                public_key: "public_1".to_string(),
            },
            payload: FormPayload {
                user_name: "Ada".to_string(),
                user_email: "ada@example.com".to_string(),
                message: "hello".to_string(),
            },
        }
    }

    #[test]
    fn accepted_delivery_is_reported_back_with_its_attempt() {
        let server = tokio::runtime::Runtime::new().expect("mock relay runtime");
        let endpoint = spawn_mock_relay(&server, StatusCode::OK);

        let outcome = deliver_through_worker(endpoint, AttemptId(7));
        assert!(outcome.is_ok(), "{outcome:?}");
    }

    #[test]
    fn rejected_delivery_is_reported_back_with_status_and_body() {
        let server = tokio::runtime::Runtime::new().expect("mock relay runtime");
        let endpoint = spawn_mock_relay(&server, StatusCode::BAD_REQUEST);

        match deliver_through_worker(endpoint, AttemptId(8)) {
            Err(RelayError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "The Public Key is invalid");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn invalid_endpoint_answers_every_delivery_as_unavailable() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(4);
        let worker = spawn_backend_thread(cmd_rx, ui_tx, "not a url".to_string());

        cmd_tx
            .send(BackendCommand::DeliverContact {
                attempt: AttemptId(3),
                request: request(),
            })
            .expect("queue command");

        let mut saw_startup_notice = false;
        loop {
            match ui_rx
                .recv_timeout(Duration::from_secs(5))
                .expect("worker event")
            {
                UiEvent::Info(message) => {
                    assert!(message.contains("relay worker startup failure"));
                    saw_startup_notice = true;
                }
                UiEvent::ContactDelivery { attempt, outcome } => {
                    assert_eq!(attempt, AttemptId(3));
                    assert!(matches!(outcome, Err(RelayError::Unavailable(_))));
                    break;
                }
            }
        }
        assert!(saw_startup_notice);

        drop(cmd_tx);
        worker.join().expect("worker exits once the queue closes");
    }
}
