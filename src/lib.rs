// Topictag: topic tagging for documents in a Pinecone vector index
//
// This is the library root. Each module corresponds to one stage of the
// tagging pipeline: configuration, the Pinecone REST clients, topic
// inference, and the orchestration that ties them together.

pub mod config;
pub mod pinecone;
pub mod pipeline;
pub mod topics;
