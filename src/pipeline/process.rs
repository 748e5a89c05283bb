// The full tagging pipeline for a single document.
//
// Ensure the index exists, resolve its data-plane host, infer topics from
// the document text, and write them onto the record's metadata.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::pinecone::control::ControlPlaneClient;
use crate::pinecone::data::IndexClient;
use crate::topics::model::TopicSet;
use crate::topics::preprocess;
use crate::topics::traits::TopicExtractor;

/// Infer topics for `text` and write them as metadata on the record
/// `document_id` in the configured index.
///
/// Returns the inferred topic set so callers can display it.
pub async fn process_document(
    config: &Config,
    extractor: &dyn TopicExtractor,
    document_id: &str,
    text: &str,
) -> Result<TopicSet> {
    let control = ControlPlaneClient::new(&config.control_plane_url, &config.pinecone_api_key)?;
    control.ensure_index(&config.create_index_request()).await?;

    let host = resolve_host(config, &control).await?;
    let index = IndexClient::new(&host, &config.pinecone_api_key)?;

    let segments = preprocess::segment_document(text);
    let topic_set = extractor.extract(&segments)?;

    let labels = topic_set.metadata_labels();
    index
        .update_metadata(document_id, serde_json::json!({ "topics": labels }))
        .await?;

    info!(id = document_id, topics = ?labels, "Updated document metadata");
    Ok(topic_set)
}

/// Find the data-plane host for the configured index: the explicit
/// override wins, otherwise ask the control plane.
async fn resolve_host(config: &Config, control: &ControlPlaneClient) -> Result<String> {
    if let Some(host) = &config.index_host {
        return Ok(host.clone());
    }

    let description = control
        .describe_index(&config.index_name)
        .await
        .with_context(|| format!("Failed to describe index '{}'", config.index_name))?;

    description
        .host
        .filter(|h| !h.is_empty())
        .with_context(|| {
            format!(
                "Index '{}' has no data-plane host yet (still provisioning?)",
                config.index_name
            )
        })
}
