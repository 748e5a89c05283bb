// Wire types for the Pinecone REST API.
//
// Control-plane fields are lowercase single words; the data plane uses
// camelCase (`setMetadata`). Response structs keep most fields optional
// since the API adds fields between versions.

use serde::{Deserialize, Serialize};

/// Request body for `POST /indexes` on the control plane.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIndexRequest {
    pub name: String,
    pub dimension: u32,
    pub metric: String,
    pub spec: IndexSpec,
}

/// Deployment spec wrapper. Only serverless deployments are supported.
#[derive(Debug, Clone, Serialize)]
pub struct IndexSpec {
    pub serverless: ServerlessSpec,
}

/// Where a serverless index lives.
#[derive(Debug, Clone, Serialize)]
pub struct ServerlessSpec {
    pub cloud: String,
    pub region: String,
}

/// Response from `GET /indexes`.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexList {
    pub indexes: Vec<IndexModel>,
}

/// A single index description, as returned by list and describe calls.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexModel {
    pub name: String,
    pub dimension: Option<u32>,
    pub metric: Option<String>,
    /// Data-plane hostname for this index (no scheme)
    pub host: Option<String>,
    pub status: Option<IndexStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexStatus {
    pub ready: Option<bool>,
    pub state: Option<String>,
}

/// Request body for `POST /vectors/update` on the data plane.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub id: String,
    pub set_metadata: serde_json::Value,
}
