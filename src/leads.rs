use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Contact request from the site's lead form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeadForm {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    /// Zone of interest
    #[serde(rename = "zona")]
    pub zone: String,
}

impl LeadForm {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadOutcome {
    Submitted,
    /// The user is pointed to another contact channel
    Failed,
}

/// Posts lead forms to a form-processing endpoint
pub struct LeadClient {
    client: Client,
    endpoint: Option<String>,
}

impl LeadClient {
    pub fn new(endpoint: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// Send one lead. Fire-and-forget: no retries.
    pub async fn submit(&self, form: &LeadForm) -> LeadOutcome {
        let Some(endpoint) = self.endpoint.as_deref() else {
            warn!("No lead endpoint configured");
            return LeadOutcome::Failed;
        };

        if !form.is_complete() {
            warn!("Lead form is missing name or email");
            return LeadOutcome::Failed;
        }

        let response = self
            .client
            .post(endpoint)
            .header("Accept", "application/json")
            .json(form)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                info!("📨 Lead submitted for zone {:?}", form.zone);
                LeadOutcome::Submitted
            }
            Ok(response) => {
                warn!("Lead endpoint returned status: {}", response.status());
                LeadOutcome::Failed
            }
            Err(e) => {
                warn!("Failed to submit lead: {}", e);
                LeadOutcome::Failed
            }
        }
    }
}
