//! Arena boundary model: a soft inward nudge near the edges and a hard
//! clamp that keeps every bounding box inside the arena.

use crate::agent::Agent;

/// The square arena. A strip of `bottom_margin` at the bottom is reserved
/// for the external score display and counts as outside.
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub size: f32,
    pub bottom_margin: f32,
}

impl Arena {
    pub fn new(size: f32, bottom_margin: f32) -> Self {
        Self {
            size,
            bottom_margin,
        }
    }

    /// Soft avoidance followed by the hard clamp. Pure, no randomness.
    pub fn contain(&self, agent: &mut Agent) {
        let (cx, cy) = agent.center();
        let quartile = self.size * 0.25;

        // The nudge only applies in the outer quartile on either axis.
        let in_outer_quartile = cx < quartile
            || cx > self.size - quartile
            || cy < quartile
            || cy > self.size - quartile;

        if in_outer_quartile {
            agent.x += self.avoidance(agent.x, agent.speed);
            agent.y += self.avoidance(agent.y, agent.speed);
        }

        self.clamp(agent);
    }

    /// Per-axis inward nudge: `speed` at the border, falling linearly to
    /// zero a quarter of the arena away, negated on the far side.
    pub fn avoidance(&self, coordinate: f32, speed: f32) -> f32 {
        let from_zero = coordinate;
        let from_max = self.size - coordinate;
        let from_border = from_zero.min(from_max);

        let falloff = 1.0 - from_border / (self.size / 4.0);
        if falloff <= 0.0 {
            return 0.0;
        }
        let magnitude = speed * falloff.min(1.0);

        if from_border == from_max {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Keep the agent's bounding box inside `[0, size]` on x and
    /// `[0, size - bottom_margin]` on y.
    pub fn clamp(&self, agent: &mut Agent) {
        agent.x = agent.x.clamp(0.0, self.size - agent.size);
        agent.y = agent.y.clamp(0.0, self.size - self.bottom_margin - agent.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Kind;

    fn arena() -> Arena {
        Arena::new(500.0, 40.0)
    }

    fn agent_at(x: f32, y: f32) -> Agent {
        Agent::new(Kind::Rock, x, y, 15.0, 2.0)
    }

    #[test]
    fn test_center_untouched() {
        let arena = arena();
        let mut agent = agent_at(242.5, 230.0);
        let (x, y) = (agent.x, agent.y);

        arena.contain(&mut agent);
        assert_eq!((agent.x, agent.y), (x, y));
    }

    #[test]
    fn test_near_left_border_pushed_right() {
        let arena = arena();
        let mut agent = agent_at(5.0, 250.0);

        arena.contain(&mut agent);
        assert!(agent.x > 5.0);
        assert_eq!(agent.y, 250.0, "y is well inside, no nudge");
    }

    #[test]
    fn test_near_right_border_pushed_left() {
        let arena = arena();
        let mut agent = agent_at(475.0, 250.0);

        arena.contain(&mut agent);
        assert!(agent.x < 475.0);
    }

    #[test]
    fn test_avoidance_linear_falloff() {
        let arena = arena();

        assert_eq!(arena.avoidance(0.0, 2.0), 2.0);
        assert_eq!(arena.avoidance(62.5, 2.0), 1.0);
        assert_eq!(arena.avoidance(125.0, 2.0), 0.0);
        assert_eq!(arena.avoidance(250.0, 2.0), 0.0);
        assert_eq!(arena.avoidance(500.0, 2.0), -2.0);
    }

    #[test]
    fn test_clamp_bounds() {
        let arena = arena();

        let mut agent = agent_at(-10.0, 600.0);
        arena.clamp(&mut agent);
        assert_eq!(agent.x, 0.0);
        assert_eq!(agent.y, 500.0 - 40.0 - 15.0);

        let mut agent = agent_at(700.0, -3.0);
        arena.clamp(&mut agent);
        assert_eq!(agent.x, 500.0 - 15.0);
        assert_eq!(agent.y, 0.0);
    }

    #[test]
    fn test_contain_never_leaves_arena() {
        let arena = arena();

        for &(x, y) in &[(-50.0, -50.0), (499.0, 499.0), (0.0, 460.0), (490.0, 0.0)] {
            let mut agent = agent_at(x, y);
            arena.contain(&mut agent);
            assert!(agent.x >= 0.0 && agent.x + agent.size <= arena.size);
            assert!(agent.y >= 0.0 && agent.y + agent.size <= arena.size - arena.bottom_margin);
        }
    }
}
