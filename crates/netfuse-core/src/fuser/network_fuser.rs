use crate::config::FuserConfig;
use crate::error::Result;
use crate::fuser::{collapse, detector};
use crate::graph::{CollapsedGraph, FusedGraph};
use crate::similarity::Similarity;
use crate::types::{InputGraph, NodeToComponent};

/// Fuses graphs by finding analogs above a threshold with a caller-supplied
/// similarity capability, then collapses analog components into single nodes.
///
/// The fuser owns its similarity function and configuration for its lifetime;
/// separate instances share no state. The two public operations are
/// [`fuse`](NetworkFuser::fuse) and [`collapse`](NetworkFuser::collapse), and
/// both return values with no aliasing back into the fuser.
pub struct NetworkFuser<S: Similarity> {
    simfn: S,
    config: FuserConfig,
}

impl<S: Similarity> NetworkFuser<S> {
    /// Fuser with the default configuration (threshold 0.95, sequential).
    pub fn new(simfn: S) -> Self {
        Self {
            simfn,
            config: FuserConfig::default(),
        }
    }

    /// Fuser with an explicit configuration. Fails on an invalid config
    /// (non-finite threshold).
    pub fn with_config(simfn: S, config: FuserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { simfn, config })
    }

    pub fn config(&self) -> &FuserConfig {
        &self.config
    }

    /// Minimum similarity score, exclusive, for two nodes to be treated as
    /// the same entity.
    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Fuse stage: build the disjoint union of the input graphs, then run
    /// analog detection across every unordered pair of nodes (within and
    /// across inputs).
    ///
    /// Deterministic for a deterministic similarity function. On a similarity
    /// failure the whole operation aborts; no partial fused graph is
    /// returned.
    pub fn fuse(&self, graphs: &[InputGraph]) -> Result<FusedGraph> {
        let mut fused = FusedGraph::disjoint_union(graphs)?;
        log::debug!(
            "fuse: {} input graphs, {} nodes, {} original edges",
            graphs.len(),
            fused.node_count(),
            fused.original_edge_count()
        );
        detector::detect_analogs(&mut fused, &self.simfn, &self.config)?;
        Ok(fused)
    }

    /// Collapse stage: merge each analog-connected component into one node
    /// and redirect every ORIGINAL edge accordingly.
    ///
    /// Returns the collapsed multigraph and the total mapping from fused node
    /// ids to component ids. An empty fused graph collapses to an empty graph
    /// and an empty mapping.
    pub fn collapse(&self, fused: &FusedGraph) -> Result<(CollapsedGraph, NodeToComponent)> {
        collapse::collapse_components(fused)
    }
}
