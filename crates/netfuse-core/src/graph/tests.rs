use crate::error::NetfuseError;
use crate::graph::*;
use crate::types::*;
use serde_json::json;

fn attrs(key: &str, value: &str) -> AttrMap {
    let mut map = AttrMap::new();
    map.insert(key.to_string(), json!(value));
    map
}

/// Two chain graphs:
/// G0: A -> B
/// G1: C -> D
fn chain_pair() -> (InputGraph, InputGraph) {
    let g0 = InputGraph::new()
        .with_node("A")
        .with_node("B")
        .with_attributed_edge("A", "B", attrs("label", "ab"));
    let g1 = InputGraph::new()
        .with_node("C")
        .with_node("D")
        .with_attributed_edge("C", "D", attrs("label", "cd"));
    (g0, g1)
}

#[test]
fn test_disjoint_union_counts() {
    let (g0, g1) = chain_pair();
    let fused = FusedGraph::disjoint_union(&[g0, g1]).unwrap();

    assert_eq!(fused.node_count(), 4);
    assert_eq!(fused.original_edge_count(), 2);
    assert_eq!(fused.analog_edge_count(), 0);
    assert!(fused.contains(&NodeId::new(0, "A")));
    assert!(fused.contains(&NodeId::new(1, "D")));
    assert!(!fused.contains(&NodeId::new(0, "C")));
}

#[test]
fn test_disjoint_union_requires_at_least_one_graph() {
    let err = FusedGraph::disjoint_union(&[]).unwrap_err();
    assert!(matches!(err, NetfuseError::InvalidInput(_)));
}

#[test]
fn test_duplicate_local_id_rejected() {
    let g = InputGraph::new().with_node("A").with_node("A");
    let err = FusedGraph::disjoint_union(&[g]).unwrap_err();
    assert!(matches!(err, NetfuseError::InvalidInput(_)));
}

#[test]
fn test_edge_to_undeclared_node_rejected() {
    let g = InputGraph::new().with_node("A").with_edge("A", "ghost");
    let err = FusedGraph::disjoint_union(&[g]).unwrap_err();
    match err {
        NetfuseError::InvalidInput(msg) => assert!(msg.contains("ghost")),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_provenance_keeps_reused_ids_distinct() {
    // Both graphs call their node "A"; the fused graph keeps them apart.
    let g0 = InputGraph::new().with_node("A");
    let g1 = InputGraph::new().with_node("A");
    let fused = FusedGraph::disjoint_union(&[g0, g1]).unwrap();

    assert_eq!(fused.node_count(), 2);
    assert!(fused.contains(&NodeId::new(0, "A")));
    assert!(fused.contains(&NodeId::new(1, "A")));
}

#[test]
fn test_attributes_copied_verbatim() {
    let g = InputGraph::new()
        .with_attributed_node("A", attrs("kind", "span"))
        .with_node("B")
        .with_attributed_edge("A", "B", attrs("weight", "3"));
    let fused = FusedGraph::disjoint_union(&[g]).unwrap();

    let a = fused.node(&NodeId::new(0, "A")).unwrap();
    assert_eq!(a.attrs.get("kind"), Some(&json!("span")));

    let (from, to, edge_attrs) = fused.original_edges().next().unwrap();
    assert_eq!(from.id.local, "A");
    assert_eq!(to.id.local, "B");
    assert_eq!(edge_attrs.get("weight"), Some(&json!("3")));
}

#[test]
fn test_parallel_edges_preserved() {
    let g = InputGraph::new()
        .with_node("A")
        .with_node("B")
        .with_attributed_edge("A", "B", attrs("n", "1"))
        .with_attributed_edge("A", "B", attrs("n", "2"));
    let fused = FusedGraph::disjoint_union(&[g]).unwrap();
    assert_eq!(fused.original_edge_count(), 2);
}

#[test]
fn test_analog_insertion_idempotent() {
    let (g0, g1) = chain_pair();
    let mut fused = FusedGraph::disjoint_union(&[g0, g1]).unwrap();
    let a = NodeId::new(0, "A");
    let c = NodeId::new(1, "C");

    assert!(fused.add_analog(&a, &c).unwrap());
    assert!(!fused.add_analog(&a, &c).unwrap());
    assert!(!fused.add_analog(&c, &a).unwrap()); // undirected

    assert_eq!(fused.analog_edge_count(), 1);
    assert!(fused.has_analog(&a, &c));
    assert!(fused.has_analog(&c, &a));
}

#[test]
fn test_analog_self_edge_rejected() {
    let (g0, g1) = chain_pair();
    let mut fused = FusedGraph::disjoint_union(&[g0, g1]).unwrap();
    let a = NodeId::new(0, "A");
    assert!(matches!(
        fused.add_analog(&a, &a),
        Err(NetfuseError::InvalidInput(_))
    ));
}

#[test]
fn test_analog_unknown_node_rejected() {
    let (g0, g1) = chain_pair();
    let mut fused = FusedGraph::disjoint_union(&[g0, g1]).unwrap();
    let a = NodeId::new(0, "A");
    let ghost = NodeId::new(7, "Z");
    assert!(matches!(
        fused.add_analog(&a, &ghost),
        Err(NetfuseError::InvalidInput(_))
    ));
}

#[test]
fn test_neighbor_enumeration_with_kinds() {
    let (g0, g1) = chain_pair();
    let mut fused = FusedGraph::disjoint_union(&[g0, g1]).unwrap();
    let a = NodeId::new(0, "A");
    let b = NodeId::new(0, "B");
    let c = NodeId::new(1, "C");
    fused.add_analog(&a, &c).unwrap();

    // A has one original out-edge (to B) and one analog partner (C).
    let out = fused.out_neighbors(&a).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out
        .iter()
        .any(|(n, k, _)| n.id == b && *k == EdgeKind::Original));
    assert!(out
        .iter()
        .any(|(n, k, at)| n.id == c && *k == EdgeKind::Analog && at.is_empty()));

    // Analog evidence is undirected, so C shows up among A's in-neighbors too.
    let inn = fused.in_neighbors(&a).unwrap();
    assert_eq!(inn.len(), 1);
    assert_eq!(inn[0].0.id, c);
    assert_eq!(inn[0].1, EdgeKind::Analog);

    let analogs = fused.analog_neighbors(&a).unwrap();
    assert_eq!(analogs.len(), 1);
    assert_eq!(analogs[0].id, c);
}
