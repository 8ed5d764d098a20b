use shared::domain::FormField;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("relay unavailable: {0}")]
    Unavailable(String),
}

/// Both variants surface as the same failed status; they differ only in logs.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("relay environment variables are not set: {}", .missing.join(", "))]
    ConfigurationMissing { missing: Vec<&'static str> },
    #[error("relay send error: {0}")]
    DeliveryFailure(#[from] RelayError),
}

impl ContactError {
    pub fn kind(&self) -> &'static str {
        match self {
            ContactError::ConfigurationMissing { .. } => "configuration",
            ContactError::DeliveryFailure(_) => "delivery",
        }
    }
}

/// A submit that never leaves Idle/terminal state, like a browser refusing the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("required field `{}` is empty", .0.name())]
    MissingField(FormField),
    #[error("`user_email` is not a valid email address")]
    InvalidEmail,
}
