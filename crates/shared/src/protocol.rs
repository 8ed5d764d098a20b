//! Wire format of the EmailJS-compatible relay.

use serde::{Deserialize, Serialize};

use crate::domain::FormPayload;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailRequest {
    pub service_id: String,
    pub template_id: String,
    /// The relay calls the public key `user_id`.
    pub user_id: String,
    pub template_params: FormPayload,
}
