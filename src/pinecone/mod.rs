// Pinecone REST clients: control plane (index lifecycle) and data plane
// (per-record metadata updates).

pub mod control;
pub mod data;
pub mod types;
