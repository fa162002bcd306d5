use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use url::Url;

use crate::error::TransportError;

use super::draft::FormDraft;
use super::relay::{FormRelay, http_client, parse_endpoint, post_json};

/// Appends newsletter sign-ups to a spreadsheet-backed API.
///
/// Body: `{"data": {<field>: <value>, ...}}`.
#[derive(Debug, Clone)]
pub struct SheetRelay {
    client: Client,
    url: Url,
}

impl SheetRelay {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, TransportError> {
        Ok(Self {
            client: http_client(timeout)?,
            url: parse_endpoint("newsletter", url)?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn payload(draft: &FormDraft) -> serde_json::Value {
        json!({ "data": draft.to_json() })
    }
}

#[async_trait]
impl FormRelay for SheetRelay {
    async fn submit(&self, draft: &FormDraft) -> Result<(), TransportError> {
        post_json(&self.client, &self.url, &Self::payload(draft)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_wraps_fields_in_data() {
        let draft = FormDraft::new()
            .field("name", " Ada ")
            .field("email", "ada@launchpod.events");
        assert_eq!(
            SheetRelay::payload(&draft),
            json!({"data": {"name": "Ada", "email": "ada@launchpod.events"}})
        );
    }

    #[test]
    fn empty_url_is_not_configured() {
        let err = SheetRelay::new("  ", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, TransportError::NotConfigured(_)));
    }
}
