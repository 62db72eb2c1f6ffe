//! Two-stage fusion engine.
//!
//! - `fuse`: disjoint-union the input graphs and draw analog edges between
//!   every pair of nodes the similarity capability scores above threshold.
//! - `collapse`: merge each analog-connected component into a single node,
//!   redirecting every original edge (self-loops for intra-component edges).

mod collapse;
mod detector;
mod network_fuser;

pub use network_fuser::NetworkFuser;
