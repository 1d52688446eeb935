use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use rsvp_core::{ResponseRecord, ResponsesEnvelope, RsvpApi, StatsSummary};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{ClientError, Result};

/// RSVP API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base address of the RSVP API
    #[serde(default = "ClientConfig::default_base_url")]
    pub base_url: String,

    /// Request timeout (seconds)
    #[serde(default = "ClientConfig::default_timeout")]
    pub timeout_secs: u64,
}

impl ClientConfig {
    fn default_base_url() -> String {
        "http://18.118.160.254:3001".to_string()
    }

    const fn default_timeout() -> u64 {
        10
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout(),
        }
    }
}

/// Read-only client for the two RSVP endpoints.
pub struct RsvpClient {
    client: Client,
    base_url: String,
}

impl RsvpClient {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::BaseUrl("empty base address".to_string()).into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        info!("Creating RsvpClient for {base_url}");
        Ok(Self { client, base_url })
    }

    async fn get_responses(&self) -> Result<Vec<ResponseRecord>> {
        let envelope = self
            .client
            .get(format!("{}/api/responses", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<ResponsesEnvelope>()
            .await?;

        debug!("Fetched {} response records", envelope.responses.len());
        Ok(envelope.responses)
    }

    async fn get_stats(&self) -> Result<StatsSummary> {
        let stats = self
            .client
            .get(format!("{}/api/stats", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<StatsSummary>()
            .await?;

        debug!("Fetched stats summary: {stats:?}");
        Ok(stats)
    }
}

#[async_trait]
impl RsvpApi for RsvpClient {
    async fn fetch_responses(&self) -> anyhow::Result<Vec<ResponseRecord>> {
        Ok(self.get_responses().await?)
    }

    async fn fetch_stats(&self) -> anyhow::Result<StatsSummary> {
        Ok(self.get_stats().await?)
    }
}
