use crate::types::{AttrMap, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One component of the fused graph, merged into a single node.
///
/// The component is identified by its smallest member id, which is stable for
/// a given fused graph. No attribute reconciliation happens across members;
/// the full member set is exposed so callers can apply their own reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollapsedNode {
    /// Smallest member id, used as the component identifier.
    pub id: NodeId,

    /// All fused nodes merged into this component, sorted ascending.
    pub members: Vec<NodeId>,
}

/// A redirected ORIGINAL edge. One collapsed edge exists per original edge:
/// direction, attributes, and multiplicity all survive the collapse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollapsedEdge {
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub attrs: AttrMap,
}

/// The collapsed multigraph: one node per analog-connected component of the
/// fused graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollapsedGraph {
    nodes: Vec<CollapsedNode>,
    index: HashMap<NodeId, usize>,
    edges: Vec<CollapsedEdge>,
}

impl CollapsedGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Components, ordered by their identifier.
    pub fn nodes(&self) -> impl Iterator<Item = &CollapsedNode> {
        self.nodes.iter()
    }

    pub fn node(&self, id: &NodeId) -> Option<&CollapsedNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Redirected edges with endpoints resolved, in the order of the
    /// underlying ORIGINAL edges.
    pub fn edges(&self) -> impl Iterator<Item = (&CollapsedNode, &CollapsedNode, &AttrMap)> {
        self.edges
            .iter()
            .map(|e| (&self.nodes[e.from], &self.nodes[e.to], &e.attrs))
    }

    /// Number of edges whose endpoints collapsed into the same component.
    pub fn self_loop_count(&self) -> usize {
        self.edges.iter().filter(|e| e.from == e.to).count()
    }

    /// Member set of the component identified by `id`.
    pub fn members(&self, id: &NodeId) -> Option<&[NodeId]> {
        self.node(id).map(|n| n.members.as_slice())
    }

    /// All edges from component `from` to component `to` (self-loops when the
    /// two ids are equal). Multiplicity is visible here: one entry per
    /// surviving original edge.
    pub fn edges_between(&self, from: &NodeId, to: &NodeId) -> Vec<&AttrMap> {
        let (Some(&fi), Some(&ti)) = (self.index.get(from), self.index.get(to)) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .filter(|e| e.from == fi && e.to == ti)
            .map(|e| &e.attrs)
            .collect()
    }

    // Construction primitives for the collapse pass.

    pub(crate) fn push_node(&mut self, node: CollapsedNode) -> usize {
        let idx = self.nodes.len();
        self.index.insert(node.id.clone(), idx);
        self.nodes.push(node);
        idx
    }

    pub(crate) fn push_edge(&mut self, from: usize, to: usize, attrs: AttrMap) {
        self.edges.push(CollapsedEdge { from, to, attrs });
    }
}
