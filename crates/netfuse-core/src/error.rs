use crate::types::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NetfuseError>;

#[derive(Debug, Error)]
pub enum NetfuseError {
    /// Malformed or insufficient input graphs: no graphs at all, a repeated
    /// local node id, an edge referencing a node its graph never declared,
    /// or an out-of-range configuration value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The caller-supplied similarity capability failed (returned an error or
    /// a non-finite score). The fuse pass aborts at the offending source node.
    #[error("Similarity evaluation failed at node {node}: {source}")]
    SimilarityEvaluation {
        node: NodeId,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Data-integrity violation inside a fused graph: an edge references a
    /// node missing from the node table.
    #[error("Inconsistent fused graph: {0}")]
    InconsistentGraph(String),
}
