//! Intra-population collision resolution.
//!
//! Overlapping agents of the same kind push apart along each axis
//! independently. The check runs against the population's positions as they
//! were at tick start, so earlier resolutions in the same tick cannot
//! double-count.

use crate::agent::Agent;

/// Push `agent` away from every same-population neighbor whose bounding box
/// overlaps it in the tick-start snapshot.
///
/// The push is `speed` per overlapping neighbor per axis, axis-decomposed
/// rather than normalized: diagonal overlaps resolve along both axes at
/// once. Zero separation on an axis applies no push on that axis.
pub fn resolve(agent: &mut Agent, own_positions: &[(f32, f32)], self_index: usize) {
    for (index, &(other_x, other_y)) in own_positions.iter().enumerate() {
        if index == self_index {
            continue;
        }
        if !agent.overlaps_at(other_x, other_y) {
            continue;
        }

        let separation_x = agent.x - other_x;
        if separation_x > 0.0 {
            agent.x += agent.speed;
        } else if separation_x < 0.0 {
            agent.x -= agent.speed;
        }

        let separation_y = agent.y - other_y;
        if separation_y > 0.0 {
            agent.y += agent.speed;
        } else if separation_y < 0.0 {
            agent.y -= agent.speed;
        }
    }
}
