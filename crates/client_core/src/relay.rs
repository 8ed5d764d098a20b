use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::FormPayload, protocol::SendEmailRequest};
use url::Url;

use crate::{config::RelayCredentials, error::RelayError};

/// Upper bound on one relay call, so a stalled relay still ends in `Error`.
pub const DEFAULT_RELAY_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    pub credentials: RelayCredentials,
    pub payload: FormPayload,
}

impl RelayRequest {
    pub fn to_wire(&self) -> SendEmailRequest {
        SendEmailRequest {
            service_id: self.credentials.service_id.clone(),
            template_id: self.credentials.template_id.clone(),
            user_id: self.credentials.public_key.clone(),
            template_params: self.payload.clone(),
        }
    }
}

/// Transactional-email relay that delivers a form to a fixed recipient.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn send(&self, request: &RelayRequest) -> Result<(), RelayError>;
}

pub struct EmailJsRelay {
    http: Client,
    endpoint: Url,
}

impl EmailJsRelay {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        Self::with_timeout(endpoint, DEFAULT_RELAY_TIMEOUT)
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("invalid relay endpoint '{endpoint}'"))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build relay http client")?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Relay for EmailJsRelay {
    async fn send(&self, request: &RelayRequest) -> Result<(), RelayError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request.to_wire())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "relay accepted contact request");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
#[path = "tests/relay_tests.rs"]
mod tests;
