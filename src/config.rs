use std::env;

use anyhow::{Context, Result};

use crate::pinecone::control::DEFAULT_CONTROL_PLANE_URL;
use crate::pinecone::types::{CreateIndexRequest, IndexSpec, ServerlessSpec};

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// API key sent as the Api-Key header on every Pinecone request
    pub pinecone_api_key: String,
    /// Name of the target index
    pub index_name: String,
    /// Vector dimensionality used when creating the index.
    /// Must match the embedding model writing to the index.
    pub dimension: u32,
    /// Distance metric used when creating the index
    pub metric: String,
    /// Serverless cloud provider used when creating the index
    pub cloud: String,
    /// Serverless region used when creating the index
    pub region: String,
    /// Control-plane base URL (overridable for tests and gateways)
    pub control_plane_url: String,
    /// Data-plane host override; when unset the host is resolved
    /// via describe-index
    pub index_host: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything except the API key has a default, so `topics` works with
    /// an empty environment. Network commands call `require_api_key` first.
    pub fn load() -> Result<Self> {
        let dimension = match env::var("PINECONE_DIMENSION") {
            Ok(v) => v
                .parse()
                .context("PINECONE_DIMENSION must be a positive integer")?,
            Err(_) => 1536,
        };

        Ok(Self {
            pinecone_api_key: env::var("PINECONE_API_KEY").unwrap_or_default(),
            index_name: env::var("PINECONE_INDEX").unwrap_or_else(|_| "dms-index".to_string()),
            dimension,
            metric: env::var("PINECONE_METRIC").unwrap_or_else(|_| "cosine".to_string()),
            cloud: env::var("PINECONE_CLOUD").unwrap_or_else(|_| "aws".to_string()),
            region: env::var("PINECONE_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            control_plane_url: env::var("PINECONE_CONTROL_PLANE_URL")
                .unwrap_or_else(|_| DEFAULT_CONTROL_PLANE_URL.to_string()),
            index_host: env::var("PINECONE_INDEX_HOST").ok(),
        })
    }

    /// Check that the Pinecone API key is configured.
    /// Call this before any operation that talks to the index.
    pub fn require_api_key(&self) -> Result<()> {
        if self.pinecone_api_key.is_empty() {
            anyhow::bail!(
                "PINECONE_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    /// The creation request for the configured index.
    pub fn create_index_request(&self) -> CreateIndexRequest {
        CreateIndexRequest {
            name: self.index_name.clone(),
            dimension: self.dimension,
            metric: self.metric.clone(),
            spec: IndexSpec {
                serverless: ServerlessSpec {
                    cloud: self.cloud.clone(),
                    region: self.region.clone(),
                },
            },
        }
    }
}
