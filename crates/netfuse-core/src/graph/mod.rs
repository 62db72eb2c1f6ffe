mod collapsed;
mod fused;
mod union_find;

pub use collapsed::{CollapsedEdge, CollapsedGraph, CollapsedNode};
pub use fused::{FusedEdge, FusedGraph, FusedNode};
pub use union_find::UnionFind;

#[cfg(test)]
mod tests;
