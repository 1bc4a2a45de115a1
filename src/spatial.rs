//! Exact nearest-neighbor queries over a candidate population.

use crate::agent::Agent;

/// Result of a nearest-neighbor query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    /// Index of the nearest candidate in the queried slice
    pub index: usize,
    /// Per-axis offset from the query position to the candidate
    pub dx: f32,
    pub dy: f32,
    /// Euclidean distance
    pub distance: f32,
}

/// Find the candidate closest to `(x, y)`.
///
/// Linear scan, exact result. Ties resolve to the first-encountered
/// candidate, so the outcome is deterministic for a fixed iteration order.
/// Returns `None` for an empty candidate set.
pub fn nearest(x: f32, y: f32, candidates: &[Agent]) -> Option<Nearest> {
    let mut best: Option<Nearest> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let dx = candidate.x - x;
        let dy = candidate.y - y;
        let distance = (dx * dx + dy * dy).sqrt();

        if best.map_or(true, |b| distance < b.distance) {
            best = Some(Nearest {
                index,
                dx,
                dy,
                distance,
            });
        }
    }

    best
}
