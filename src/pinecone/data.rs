// HTTP client for a Pinecone index's data plane.
//
// The data plane lives on a per-index host (returned by describe-index).
// Only the metadata-update operation is needed here: `POST /vectors/update`
// with a record id and a `setMetadata` mapping updates the record in place
// without touching its vector values.

use anyhow::{Context, Result};
use tracing::debug;

use super::control::API_VERSION;
use super::types::UpdateRequest;

/// Client bound to a single index's data-plane host.
pub struct IndexClient {
    client: reqwest::Client,
    host_url: String,
    api_key: String,
}

impl IndexClient {
    /// Create a data-plane client for the given host.
    ///
    /// Accepts either a bare hostname (as describe-index returns) or a full
    /// URL with scheme (as test stubs and self-hosted gateways use).
    pub fn new(host: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("topictag/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            host_url: normalize_host(host),
            api_key: api_key.to_string(),
        })
    }

    /// Update a record's metadata in place.
    pub async fn update_metadata(&self, id: &str, metadata: serde_json::Value) -> Result<()> {
        let url = format!("{}/vectors/update", self.host_url);

        let request = UpdateRequest {
            id: id.to_string(),
            set_metadata: metadata,
        };

        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .json(&request)
            .send()
            .await
            .context("Pinecone update request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Pinecone update returned {}: {}", status, body);
        }

        debug!(id = id, "Updated record metadata");
        Ok(())
    }
}

/// Prefix bare hostnames with https:// and strip trailing slashes.
pub fn normalize_host(host: &str) -> String {
    let trimmed = host.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
