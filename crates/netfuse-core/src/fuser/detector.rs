use crate::config::FuserConfig;
use crate::error::{NetfuseError, Result};
use crate::graph::{FusedGraph, FusedNode};
use crate::similarity::Similarity;
use rayon::prelude::*;

/// Analog detection: evaluate the similarity capability over every unordered
/// pair of distinct fused nodes and record an analog pair for each score
/// strictly above the threshold.
///
/// Each source node `u` is scored against the candidate tail (nodes with a
/// larger index), so every unordered pair is evaluated exactly once and
/// self-comparison never happens. ORIGINAL edges are untouched. With the
/// parallel flag set, source nodes are scanned across the rayon pool into
/// per-source buffers that are merged afterward; insertion is idempotent and
/// commutative, so the resulting analog set matches the sequential scan.
///
/// A similarity failure aborts the whole pass with `SimilarityEvaluation`
/// naming the source node being scored.
pub(crate) fn detect_analogs<S>(
    graph: &mut FusedGraph,
    simfn: &S,
    config: &FuserConfig,
) -> Result<()>
where
    S: Similarity + ?Sized,
{
    let n = graph.node_count();
    if n < 2 {
        return Ok(());
    }

    let scan = |u: usize| -> Result<Vec<(usize, usize)>> {
        let source = graph.node_by_index(u);
        let candidates: Vec<&FusedNode> = ((u + 1)..n).map(|i| graph.node_by_index(i)).collect();
        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        let hits = simfn
            .analogs(source, &candidates, config.threshold)
            .map_err(|e| NetfuseError::SimilarityEvaluation {
                node: source.id.clone(),
                source: e,
            })?;
        Ok(hits.into_iter().map(|h| (u, u + 1 + h)).collect())
    };

    let pairs: Vec<(usize, usize)> = if config.parallel {
        let buffers: Vec<Vec<(usize, usize)>> =
            (0..n).into_par_iter().map(scan).collect::<Result<_>>()?;
        buffers.into_iter().flatten().collect()
    } else {
        let mut all = Vec::new();
        for u in 0..n {
            if config.progress_every > 0 && u > 0 && u % config.progress_every == 0 {
                log::debug!(
                    "analog scan: {u}/{n} source nodes, threshold {}",
                    config.threshold
                );
            }
            all.extend(scan(u)?);
        }
        all
    };

    for (a, b) in pairs {
        graph.add_analog_by_index(a, b);
    }

    log::info!(
        "analog scan complete: {n} nodes, {} analog pairs",
        graph.analog_edge_count()
    );

    Ok(())
}
