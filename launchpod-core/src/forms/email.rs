use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use crate::error::TransportError;

use super::draft::FormDraft;
use super::relay::{FormRelay, http_client, parse_endpoint, post_json};

/// Identifiers of the hosted email template used for booking requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailTemplate {
    fn check(&self) -> Result<(), TransportError> {
        for (name, value) in [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ] {
            if value.trim().is_empty() {
                return Err(TransportError::NotConfigured(format!(
                    "email relay {name} is empty"
                )));
            }
        }
        Ok(())
    }
}

/// Sends booking requests through a hosted email-template service.
#[derive(Clone)]
pub struct EmailRelay {
    client: Client,
    endpoint: Url,
    template: EmailTemplate,
}

impl std::fmt::Debug for EmailRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailRelay")
            .field("endpoint", &self.endpoint.as_str())
            .field("service_id", &self.template.service_id)
            .field("template_id", &self.template.template_id)
            .finish()
    }
}

impl EmailRelay {
    pub fn new(
        endpoint: &str,
        template: EmailTemplate,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        template.check()?;
        Ok(Self {
            client: http_client(timeout)?,
            endpoint: parse_endpoint("email", endpoint)?,
            template,
        })
    }

    pub fn payload(&self, draft: &FormDraft) -> serde_json::Value {
        json!({
            "service_id": self.template.service_id,
            "template_id": self.template.template_id,
            "user_id": self.template.public_key,
            "template_params": draft.to_json(),
        })
    }
}

#[async_trait]
impl FormRelay for EmailRelay {
    async fn submit(&self, draft: &FormDraft) -> Result<(), TransportError> {
        post_json(&self.client, &self.endpoint, &self.payload(draft)).await
    }
}
