use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Arbitrary caller-supplied attributes on nodes and edges.
pub type AttrMap = HashMap<String, Value>;

/// Mapping from every fused node to the id of the component it collapsed
/// into. Total over the fused node set; produced once per collapse call.
pub type NodeToComponent = HashMap<NodeId, NodeId>;

/// Provenance-tagged node identity inside a fused graph.
///
/// Input graphs may reuse local ids freely; tagging each node with the index
/// of its origin graph in the fuse call keeps the disjoint union disjoint.
/// Ordering is `(graph, local)`, which makes "smallest member" a stable,
/// deterministic choice of component representative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId {
    /// Index of the origin graph in the sequence passed to `fuse`.
    pub graph: usize,

    /// The node's id within its origin graph, copied verbatim.
    pub local: String,
}

impl NodeId {
    pub fn new(graph: usize, local: impl Into<String>) -> Self {
        Self {
            graph,
            local: local.into(),
        }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}:{}", self.graph, self.local)
    }
}

/// Kind tag on fused-graph edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// An edge copied from an input graph. Directed, attributed, never
    /// removed or merged while fusing.
    Original,

    /// Equivalence evidence between two nodes, inserted by the analog
    /// detector. Undirected, no attributes.
    Analog,
}

/// A node in a caller-constructed input graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputNode {
    pub id: String,
    pub attrs: AttrMap,
}

/// A directed edge in a caller-constructed input graph. Parallel edges
/// between the same ordered pair are allowed and preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEdge {
    pub from: String,
    pub to: String,
    pub attrs: AttrMap,
}

/// An attributed directed multigraph supplied by the caller.
///
/// How the graph got here (file, database, in-memory construction) is the
/// caller's concern; fusion only consumes node and edge enumeration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputGraph {
    pub nodes: Vec<InputNode>,
    pub edges: Vec<InputEdge>,
}

impl InputGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: impl Into<String>, attrs: AttrMap) {
        self.nodes.push(InputNode {
            id: id.into(),
            attrs,
        });
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, attrs: AttrMap) {
        self.edges.push(InputEdge {
            from: from.into(),
            to: to.into(),
            attrs,
        });
    }

    pub fn with_node(mut self, id: impl Into<String>) -> Self {
        self.add_node(id, AttrMap::new());
        self
    }

    pub fn with_attributed_node(mut self, id: impl Into<String>, attrs: AttrMap) -> Self {
        self.add_node(id, attrs);
        self
    }

    pub fn with_edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.add_edge(from, to, AttrMap::new());
        self
    }

    pub fn with_attributed_edge(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        attrs: AttrMap,
    ) -> Self {
        self.add_edge(from, to, attrs);
        self
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_orders_by_graph_then_local() {
        let a = NodeId::new(0, "z");
        let b = NodeId::new(1, "a");
        let c = NodeId::new(0, "a");
        assert!(a < b);
        assert!(c < a);
    }

    #[test]
    fn node_id_display() {
        assert_eq!(NodeId::new(2, "span-17").to_string(), "g2:span-17");
    }

    #[test]
    fn input_graph_builders() {
        let g = InputGraph::new()
            .with_node("A")
            .with_node("B")
            .with_edge("A", "B");
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edges[0].from, "A");
    }
}
