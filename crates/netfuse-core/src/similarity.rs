use crate::graph::FusedNode;

/// Result type for caller-supplied similarity code. Failures are wrapped into
/// [`NetfuseError::SimilarityEvaluation`](crate::NetfuseError::SimilarityEvaluation)
/// by the analog detector, tagged with the source node that was being scored.
pub type SimilarityResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Capability for deciding how alike two nodes are.
///
/// The engine never implements similarity itself; callers plug in cosine over
/// embeddings, edit distance, exact-match, whatever fits their node
/// attributes. Two call shapes are supported through this one trait:
///
/// - [`score`](Similarity::score) is the pairwise form and the only required
///   method: a real-valued score, higher meaning more similar.
/// - [`analogs`](Similarity::analogs) is the batched form the detector
///   actually drives: given a source node and a candidate set, return the
///   positions of candidates whose similarity to the source strictly exceeds
///   the threshold. The default implementation just filters by `score`;
///   override it to short-circuit expensive computations (e.g. one matrix
///   multiply per source node instead of N dot products).
///
/// An override of `analogs` must produce the same analog set as the default
/// for any monotone similarity function, and is responsible for rejecting
/// non-finite scores itself.
pub trait Similarity: Send + Sync {
    /// Similarity between two nodes. Higher means more similar.
    fn score(&self, u: &FusedNode, v: &FusedNode) -> SimilarityResult<f64>;

    /// Positions within `candidates` of every node whose similarity to `u`
    /// is strictly greater than `threshold`.
    fn analogs(
        &self,
        u: &FusedNode,
        candidates: &[&FusedNode],
        threshold: f64,
    ) -> SimilarityResult<Vec<usize>> {
        let mut hits = Vec::new();
        for (i, v) in candidates.iter().enumerate() {
            let score = self
                .score(u, v)
                .map_err(|e| format!("candidate {}: {e}", v.id))?;
            if !score.is_finite() {
                return Err(format!(
                    "candidate {}: similarity returned a non-finite score ({score})",
                    v.id
                )
                .into());
            }
            if score > threshold {
                hits.push(i);
            }
        }
        Ok(hits)
    }
}

/// Any thread-safe pairwise closure is a similarity capability.
impl<F> Similarity for F
where
    F: Fn(&FusedNode, &FusedNode) -> SimilarityResult<f64> + Send + Sync,
{
    fn score(&self, u: &FusedNode, v: &FusedNode) -> SimilarityResult<f64> {
        self(u, v)
    }
}
