//! Outbound relays for form submissions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::TransportError;

use super::draft::FormDraft;

/// Which form a relay serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Newsletter,
    Booking,
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormKind::Newsletter => write!(f, "newsletter"),
            FormKind::Booking => write!(f, "booking"),
        }
    }
}

/// Delivers a validated draft to an external service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn submit(&self, draft: &FormDraft) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: FormRelay + ?Sized> FormRelay for std::sync::Arc<T> {
    async fn submit(&self, draft: &FormDraft) -> Result<(), TransportError> {
        (**self).submit(draft).await
    }
}

/// HTTP client shared by the relays.
pub fn http_client(timeout: Duration) -> Result<Client, TransportError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

pub(crate) fn parse_endpoint(name: &str, raw: &str) -> Result<Url, TransportError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TransportError::NotConfigured(format!("{name} endpoint is empty")));
    }
    Url::parse(raw)
        .map_err(|e| TransportError::NotConfigured(format!("{name} endpoint {raw:?}: {e}")))
}

/// POST `body` as JSON; any non-2xx status is an error carrying the body.
pub(crate) async fn post_json(
    client: &Client,
    url: &Url,
    body: &Value,
) -> Result<(), TransportError> {
    let payload = serde_json::to_vec(body)?;
    let response = client
        .post(url.clone())
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(payload)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        tracing::debug!(%url, status = status.as_u16(), "relay accepted submission");
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(%url, status = status.as_u16(), "relay rejected submission");
    Err(TransportError::Status {
        status: status.as_u16(),
        body,
    })
}
