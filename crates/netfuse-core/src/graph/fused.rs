use crate::error::{NetfuseError, Result};
use crate::types::{AttrMap, EdgeKind, InputGraph, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

fn empty_attrs() -> &'static AttrMap {
    static EMPTY: OnceLock<AttrMap> = OnceLock::new();
    EMPTY.get_or_init(AttrMap::new)
}

/// A node in the fused graph: provenance-tagged identity plus the attributes
/// copied verbatim from its origin graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedNode {
    pub id: NodeId,
    pub attrs: AttrMap,
}

/// An ORIGINAL edge inside the fused graph. Endpoints are indices into the
/// node table; resolve them through the owning [`FusedGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedEdge {
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub attrs: AttrMap,
}

impl FusedEdge {
    pub(crate) fn endpoints(&self) -> (usize, usize) {
        (self.from, self.to)
    }
}

/// Disjoint union of the input graphs plus the analog edges discovered by
/// the fuse pass.
///
/// ORIGINAL edges are kept in insertion order, one entry per input edge
/// (multigraph: parallel edges are all preserved, never merged). ANALOG
/// pairs are undirected equivalence evidence, stored normalized as
/// `(lo, hi)` index pairs, so insertion is idempotent by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedGraph {
    nodes: Vec<FusedNode>,
    index: HashMap<NodeId, usize>,
    edges: Vec<FusedEdge>,
    analogs: BTreeSet<(usize, usize)>,
}

impl FusedGraph {
    /// Build the disjoint union of an ordered sequence of input graphs.
    ///
    /// Each node is tagged with its origin-graph index, so input graphs that
    /// happen to reuse raw node ids stay distinct. All ORIGINAL edges and
    /// their attributes are copied unchanged.
    ///
    /// Fails with `InvalidInput` when no graphs are supplied, when a graph
    /// declares the same local id twice, or when an edge references a node
    /// its own graph never declared.
    pub fn disjoint_union(graphs: &[InputGraph]) -> Result<Self> {
        if graphs.is_empty() {
            return Err(NetfuseError::InvalidInput(
                "at least one input graph is required".into(),
            ));
        }

        let mut fused = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            analogs: BTreeSet::new(),
        };

        for (graph_idx, input) in graphs.iter().enumerate() {
            for node in &input.nodes {
                let id = NodeId::new(graph_idx, node.id.clone());
                if fused.index.contains_key(&id) {
                    return Err(NetfuseError::InvalidInput(format!(
                        "graph {graph_idx} declares node '{}' more than once",
                        node.id
                    )));
                }
                fused.index.insert(id.clone(), fused.nodes.len());
                fused.nodes.push(FusedNode {
                    id,
                    attrs: node.attrs.clone(),
                });
            }

            for edge in &input.edges {
                let from = fused.resolve(graph_idx, &edge.from)?;
                let to = fused.resolve(graph_idx, &edge.to)?;
                fused.edges.push(FusedEdge {
                    from,
                    to,
                    attrs: edge.attrs.clone(),
                });
            }
        }

        Ok(fused)
    }

    fn resolve(&self, graph_idx: usize, local: &str) -> Result<usize> {
        let id = NodeId::new(graph_idx, local);
        self.index.get(&id).copied().ok_or_else(|| {
            NetfuseError::InvalidInput(format!(
                "graph {graph_idx} has an edge referencing undeclared node '{local}'"
            ))
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn original_edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn analog_edge_count(&self) -> usize {
        self.analogs.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &FusedNode> {
        self.nodes.iter()
    }

    pub fn node(&self, id: &NodeId) -> Option<&FusedNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// ORIGINAL edges with endpoints resolved, in insertion order.
    pub fn original_edges(&self) -> impl Iterator<Item = (&FusedNode, &FusedNode, &AttrMap)> {
        self.edges
            .iter()
            .map(|e| (&self.nodes[e.from], &self.nodes[e.to], &e.attrs))
    }

    /// ANALOG pairs with endpoints resolved, in node-index order.
    pub fn analog_edges(&self) -> impl Iterator<Item = (&FusedNode, &FusedNode)> {
        self.analogs
            .iter()
            .map(|&(a, b)| (&self.nodes[a], &self.nodes[b]))
    }

    /// Record equivalence evidence between two existing nodes.
    ///
    /// Undirected and idempotent: inserting (a, b) and (b, a), any number of
    /// times, leaves exactly one analog pair. Returns whether the pair was
    /// newly inserted.
    pub fn add_analog(&mut self, a: &NodeId, b: &NodeId) -> Result<bool> {
        if a == b {
            return Err(NetfuseError::InvalidInput(format!(
                "analog self-edge on node {a} is not allowed"
            )));
        }
        let ia = self.require(a)?;
        let ib = self.require(b)?;
        Ok(self.add_analog_by_index(ia, ib))
    }

    pub fn has_analog(&self, a: &NodeId, b: &NodeId) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.analogs.contains(&normalize(ia, ib)),
            _ => false,
        }
    }

    fn require(&self, id: &NodeId) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| NetfuseError::InvalidInput(format!("unknown node {id}")))
    }

    /// Out-neighbors of a node: ORIGINAL edges leaving it, plus its analog
    /// partners (analog evidence is undirected, so partners show up in both
    /// the out and in listings, with empty attributes).
    pub fn out_neighbors(&self, id: &NodeId) -> Result<Vec<(&FusedNode, EdgeKind, &AttrMap)>> {
        let idx = self.require(id)?;
        let mut result: Vec<(&FusedNode, EdgeKind, &AttrMap)> = self
            .edges
            .iter()
            .filter(|e| e.from == idx)
            .map(|e| (&self.nodes[e.to], EdgeKind::Original, &e.attrs))
            .collect();
        result.extend(self.analog_partners(idx));
        Ok(result)
    }

    /// In-neighbors of a node: ORIGINAL edges entering it, plus its analog
    /// partners.
    pub fn in_neighbors(&self, id: &NodeId) -> Result<Vec<(&FusedNode, EdgeKind, &AttrMap)>> {
        let idx = self.require(id)?;
        let mut result: Vec<(&FusedNode, EdgeKind, &AttrMap)> = self
            .edges
            .iter()
            .filter(|e| e.to == idx)
            .map(|e| (&self.nodes[e.from], EdgeKind::Original, &e.attrs))
            .collect();
        result.extend(self.analog_partners(idx));
        Ok(result)
    }

    /// Nodes connected to `id` by analog evidence.
    pub fn analog_neighbors(&self, id: &NodeId) -> Result<Vec<&FusedNode>> {
        let idx = self.require(id)?;
        Ok(self
            .analog_partner_indices(idx)
            .map(|i| &self.nodes[i])
            .collect())
    }

    fn analog_partners(
        &self,
        idx: usize,
    ) -> impl Iterator<Item = (&FusedNode, EdgeKind, &AttrMap)> {
        self.analog_partner_indices(idx)
            .map(|i| (&self.nodes[i], EdgeKind::Analog, empty_attrs()))
    }

    fn analog_partner_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.analogs.iter().filter_map(move |&(a, b)| {
            if a == idx {
                Some(b)
            } else if b == idx {
                Some(a)
            } else {
                None
            }
        })
    }

    // Index-based accessors for the fuse and collapse passes.

    pub(crate) fn node_by_index(&self, idx: usize) -> &FusedNode {
        &self.nodes[idx]
    }

    pub(crate) fn add_analog_by_index(&mut self, a: usize, b: usize) -> bool {
        debug_assert!(a != b);
        self.analogs.insert(normalize(a, b))
    }

    pub(crate) fn analog_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.analogs.iter().copied()
    }

    pub(crate) fn raw_edges(&self) -> &[FusedEdge] {
        &self.edges
    }
}

fn normalize(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
