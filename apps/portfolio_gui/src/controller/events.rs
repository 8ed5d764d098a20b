//! Events sent from the relay worker back to the page.

use client_core::{AttemptId, RelayError};

pub enum UiEvent {
    Info(String),
    ContactDelivery {
        attempt: AttemptId,
        outcome: Result<(), RelayError>,
    },
}
