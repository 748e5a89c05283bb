// HTTP client for the Pinecone control plane.
//
// The control plane manages index lifecycle: list, describe, create. The
// base URL is configurable so tests can point it at a local stub.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::types::{CreateIndexRequest, IndexList, IndexModel};

pub const DEFAULT_CONTROL_PLANE_URL: &str = "https://api.pinecone.io";

/// API version header value sent with every request.
pub(crate) const API_VERSION: &str = "2024-07";

/// Client for the Pinecone control-plane API.
pub struct ControlPlaneClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ControlPlaneClient {
    /// Create a new control-plane client pointing at the given base URL.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("topictag/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// List all indexes in the project.
    pub async fn list_indexes(&self) -> Result<IndexList> {
        let url = format!("{}/indexes", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .send()
            .await
            .context("Pinecone list-indexes request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Pinecone list-indexes returned {}: {}", status, body);
        }

        response
            .json::<IndexList>()
            .await
            .context("Failed to parse index list response")
    }

    /// Describe a single index by name. The response carries the
    /// data-plane host for that index.
    pub async fn describe_index(&self, name: &str) -> Result<IndexModel> {
        let url = format!("{}/indexes/{}", self.base_url, name);

        let response = self
            .client
            .get(&url)
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .send()
            .await
            .context("Pinecone describe-index request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Pinecone describe-index returned {}: {}", status, body);
        }

        response
            .json::<IndexModel>()
            .await
            .context("Failed to parse index description")
    }

    /// Create a new serverless index.
    pub async fn create_index(&self, request: &CreateIndexRequest) -> Result<()> {
        let url = format!("{}/indexes", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .json(request)
            .send()
            .await
            .context("Pinecone create-index request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Pinecone create-index returned {}: {}", status, body);
        }

        Ok(())
    }

    /// Check that the target index exists, creating it when missing.
    ///
    /// Returns `true` when a new index was created. A creation failure is
    /// logged and swallowed rather than propagated: the index may already
    /// be provisioning, and the metadata update downstream will surface a
    /// real error if the index truly is not there. Listing failures still
    /// propagate since they indicate bad credentials or connectivity.
    pub async fn ensure_index(&self, request: &CreateIndexRequest) -> Result<bool> {
        let list = self.list_indexes().await?;

        if list.indexes.iter().any(|ix| ix.name == request.name) {
            debug!(index = request.name, "Index already exists");
            return Ok(false);
        }

        match self.create_index(request).await {
            Ok(()) => {
                info!(
                    index = request.name,
                    dimension = request.dimension,
                    metric = request.metric,
                    "Created index"
                );
                Ok(true)
            }
            Err(e) => {
                warn!(index = request.name, error = %e, "Failed to create index, continuing");
                Ok(false)
            }
        }
    }
}
