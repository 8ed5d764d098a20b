//! Contact relay, submission state machine and section visibility tracking
//! for the portfolio page.

pub mod config;
pub mod error;
pub mod relay;
pub mod submission;
pub mod visibility;

pub use config::{load_settings, CredentialKey, CredentialSource, RelayCredentials, Settings};
pub use error::{ContactError, RelayError, SubmitRejected};
pub use relay::{EmailJsRelay, Relay, RelayRequest};
pub use submission::{AttemptId, ContactForm, PendingDelivery, Submission, SubmissionController};
pub use visibility::{IntersectionEntry, Span, VisibilityChange, VisibilityObserver};
