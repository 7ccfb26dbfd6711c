//! Budgeted top-k selection.

use tracing::warn;

/// Positions of the `k` highest scores, best first.
///
/// Ordering is `(-score, position)`, so equal scores resolve to the lowest
/// position. Deterministic for any input.
pub fn top_k(scores: &[(usize, f64)], k: usize) -> Vec<usize> {
    let mut ranked = scores.to_vec();
    ranked.sort_by(|(ia, a), (ib, b)| b.total_cmp(a).then(ia.cmp(ib)));
    ranked.into_iter().take(k).map(|(index, _)| index).collect()
}

/// Clamp a requested budget to the number of available candidates.
pub fn clamp_budget(requested: usize, available: usize, strategy: &str) -> usize {
    if requested > available {
        warn!(
            strategy,
            requested, available, "query budget exceeds candidates, clamping"
        );
        available
    } else {
        requested
    }
}
