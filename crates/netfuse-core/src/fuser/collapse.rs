use crate::error::{NetfuseError, Result};
use crate::graph::{CollapsedGraph, CollapsedNode, FusedGraph, UnionFind};
use crate::types::{NodeId, NodeToComponent};
use std::collections::HashMap;

/// Component collapse: partition the fused node set into analog-connected
/// components and rebuild the graph with one node per component.
///
/// Components come from a union-find over the analog pairs; a node with no
/// analog evidence forms a singleton. Each component is identified by its
/// smallest member id and carries the sorted member set. Every ORIGINAL edge
/// produces exactly one collapsed edge between its endpoints' components,
/// keeping direction, attributes, and multiplicity; endpoints in the same
/// component yield a self-loop. Analog pairs produce no edges of their own.
pub(crate) fn collapse_components(fused: &FusedGraph) -> Result<(CollapsedGraph, NodeToComponent)> {
    let n = fused.node_count();

    let mut uf = UnionFind::new(n);
    for (a, b) in fused.analog_pairs() {
        uf.union(a, b);
    }

    let mut members_by_root: HashMap<usize, Vec<usize>> = HashMap::new();
    for i in 0..n {
        members_by_root.entry(uf.find(i)).or_default().push(i);
    }

    // Sort members within each component and components by representative,
    // so the collapsed node order is independent of union order.
    let mut components: Vec<(Vec<usize>, Vec<NodeId>)> = members_by_root
        .into_values()
        .map(|indices| {
            let mut ids: Vec<NodeId> = indices
                .iter()
                .map(|&i| fused.node_by_index(i).id.clone())
                .collect();
            ids.sort();
            (indices, ids)
        })
        .collect();
    components.sort_by(|a, b| a.1[0].cmp(&b.1[0]));

    let mut collapsed = CollapsedGraph::default();
    let mut component_of: Vec<usize> = vec![0; n];
    let mut representatives: Vec<NodeId> = Vec::with_capacity(components.len());

    for (indices, ids) in components {
        let representative = ids[0].clone();
        let cidx = collapsed.push_node(CollapsedNode {
            id: representative.clone(),
            members: ids,
        });
        representatives.push(representative);
        for i in indices {
            component_of[i] = cidx;
        }
    }

    let mut node2fuseid = NodeToComponent::with_capacity(n);
    for (i, node) in fused.nodes().enumerate() {
        node2fuseid.insert(node.id.clone(), representatives[component_of[i]].clone());
    }

    for (pos, edge) in fused.raw_edges().iter().enumerate() {
        let (from, to) = edge.endpoints();
        if from >= n || to >= n {
            return Err(NetfuseError::InconsistentGraph(format!(
                "edge #{pos} references a node index outside the node table ({from} -> {to}, {n} nodes)"
            )));
        }
        collapsed.push_edge(component_of[from], component_of[to], edge.attrs.clone());
    }

    log::debug!(
        "collapse: {n} nodes into {} components, {} edges ({} self-loops)",
        collapsed.node_count(),
        collapsed.edge_count(),
        collapsed.self_loop_count()
    );

    Ok((collapsed, node2fuseid))
}
