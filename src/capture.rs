//! Capture semantics: close contact converts a prey into the hunter's kind.
//!
//! Detection happens during the per-agent pass, but applying a capture
//! mutates two populations, so events are queued and replayed once per tick
//! after every population has been processed.

use crate::agent::{Agent, Kind};
use crate::spatial;

/// Capture hit-box as a fraction of agent size. Smaller than the full
/// bounding box so corner-grazing overlaps do not count as contact.
pub const HITBOX_FRACTION: f32 = 0.7;

/// A queued capture, recorded during the per-agent pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureEvent {
    /// Kind of the capturing agent; the replacement spawns with this kind
    pub hunter: Kind,
    /// Kind of the captured prey
    pub prey: Kind,
    /// Index into the prey population, stable for the whole tick
    pub prey_index: usize,
}

/// Probe whether `agent` has its nearest prey within the capture hit-box.
///
/// Both axis separations must be inside the threshold. Returns the prey's
/// index, or `None` when the population is empty or nothing is in reach.
pub fn try_capture(agent: &Agent, prey: &[Agent]) -> Option<usize> {
    let target = spatial::nearest(agent.x, agent.y, prey)?;
    let hitbox = agent.size * HITBOX_FRACTION;

    if target.dx.abs() <= hitbox && target.dy.abs() <= hitbox {
        Some(target.index)
    } else {
        None
    }
}
