//! Merges graphs whose node sets describe the same kind of entity under
//! incompatible identifiers. A caller-supplied similarity function plus a
//! single threshold decide which nodes denote the same entity; equivalent
//! nodes collapse into one, with all incident edges rewired.
//!
//! ```
//! use netfuse_core::{InputGraph, NetworkFuser, FuserConfig, SimilarityResult};
//! use netfuse_core::graph::FusedNode;
//!
//! let g1 = InputGraph::new().with_node("A").with_node("B").with_edge("A", "B");
//! let g2 = InputGraph::new().with_node("a").with_node("D").with_edge("a", "D");
//!
//! // Case-insensitive id equality as a toy similarity function.
//! let simfn = |u: &FusedNode, v: &FusedNode| -> SimilarityResult<f64> {
//!     Ok(if u.id.local.eq_ignore_ascii_case(&v.id.local) { 1.0 } else { 0.0 })
//! };
//!
//! let fuser = NetworkFuser::with_config(simfn, FuserConfig::new().with_threshold(0.5))?;
//! let fused = fuser.fuse(&[g1, g2])?;
//! let (collapsed, node2fuseid) = fuser.collapse(&fused)?;
//!
//! assert_eq!(collapsed.node_count(), 3); // {A, a}, {B}, {D}
//! assert_eq!(collapsed.edge_count(), 2); // both original edges survive
//! assert_eq!(node2fuseid.len(), 4);      // every fused node is mapped
//! # Ok::<(), netfuse_core::NetfuseError>(())
//! ```

pub mod config;
pub mod error;
pub mod fuser;
pub mod graph;
pub mod similarity;
pub mod types;

pub use config::FuserConfig;
pub use error::{NetfuseError, Result};
pub use fuser::NetworkFuser;
pub use graph::{
    CollapsedEdge, CollapsedGraph, CollapsedNode, FusedEdge, FusedGraph, FusedNode, UnionFind,
};
pub use similarity::{Similarity, SimilarityResult};
pub use types::{AttrMap, EdgeKind, InputEdge, InputGraph, InputNode, NodeId, NodeToComponent};
