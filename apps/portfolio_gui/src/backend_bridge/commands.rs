//! Commands queued from the page to the relay worker.

use client_core::{AttemptId, RelayRequest};

pub enum BackendCommand {
    DeliverContact {
        attempt: AttemptId,
        request: RelayRequest,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::DeliverContact { .. } => "deliver_contact",
        }
    }
}
