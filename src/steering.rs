//! Steering: pursuit of the nearest prey, evasion of the nearest hunter,
//! plus a small wander jitter every tick.

use crate::agent::Agent;
use crate::spatial;
use rand::Rng;

/// Hunters further away than this are ignored.
pub const EVASION_RADIUS: f32 = 200.0;

/// Lower bound of the per-tick speed draw, as a fraction of `speed`.
/// The jitter is intentional: it breaks deterministic lock-step collisions.
pub const PURSUIT_JITTER: f32 = 0.7;

/// Evasion runs slightly slower than pursuit, so hunters close in over time.
pub const EVASION_FACTOR: f32 = 0.95;

/// Symmetric per-axis wander applied every tick, in arena units.
pub const WANDER_RANGE: f32 = 0.5;

/// Compute the movement delta for one agent.
///
/// The result is the vector sum of wander + pursuit + evasion; no clamping
/// happens here. Empty populations and zero-distance targets contribute
/// nothing, so the delta is always finite.
pub fn steer<R: Rng>(
    agent: &Agent,
    prey: &[Agent],
    hunters: &[Agent],
    rng: &mut R,
) -> (f32, f32) {
    let mut dx = rng.gen_range(-WANDER_RANGE..WANDER_RANGE);
    let mut dy = rng.gen_range(-WANDER_RANGE..WANDER_RANGE);

    if let Some(target) = spatial::nearest(agent.x, agent.y, prey) {
        if target.distance > 0.0 {
            let draw = rng.gen_range(agent.speed * PURSUIT_JITTER..agent.speed);
            let scale = draw / target.distance;
            dx += target.dx * scale;
            dy += target.dy * scale;
        }
    }

    if let Some(threat) = spatial::nearest(agent.x, agent.y, hunters) {
        if threat.distance > 0.0 && threat.distance < EVASION_RADIUS {
            let draw = rng.gen_range(agent.speed * PURSUIT_JITTER..agent.speed);
            let scale = -EVASION_FACTOR * draw / threat.distance;
            dx += threat.dx * scale;
            dy += threat.dy * scale;
        }
    }

    (dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Kind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn agent(kind: Kind, x: f32, y: f32) -> Agent {
        Agent::new(kind, x, y, 15.0, 2.0)
    }

    #[test]
    fn test_no_targets_only_wander() {
        let rock = agent(Kind::Rock, 250.0, 250.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..100 {
            let (dx, dy) = steer(&rock, &[], &[], &mut rng);
            assert!(dx.abs() <= WANDER_RANGE);
            assert!(dy.abs() <= WANDER_RANGE);
        }
    }

    #[test]
    fn test_pursuit_moves_toward_prey() {
        let rock = agent(Kind::Rock, 100.0, 100.0);
        let prey = vec![agent(Kind::Scissors, 400.0, 100.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        // Prey lies straight east; pursuit dominates the wander term.
        let (dx, dy) = steer(&rock, &prey, &[], &mut rng);
        assert!(dx > 0.0);
        assert!(dy.abs() <= WANDER_RANGE);
        assert!(dx <= rock.speed + WANDER_RANGE);
    }

    #[test]
    fn test_evasion_moves_away_from_hunter() {
        let rock = agent(Kind::Rock, 100.0, 100.0);
        let hunters = vec![agent(Kind::Paper, 150.0, 100.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let (dx, _) = steer(&rock, &[], &hunters, &mut rng);
        assert!(dx < 0.0, "should flee west from an eastern hunter");
    }

    #[test]
    fn test_distant_hunter_ignored() {
        let rock = agent(Kind::Rock, 0.0, 0.0);
        let hunters = vec![agent(Kind::Paper, 300.0, 0.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        for _ in 0..50 {
            let (dx, dy) = steer(&rock, &[], &hunters, &mut rng);
            assert!(dx.abs() <= WANDER_RANGE);
            assert!(dy.abs() <= WANDER_RANGE);
        }
    }

    #[test]
    fn test_zero_distance_prey_guarded() {
        let rock = agent(Kind::Rock, 100.0, 100.0);
        let prey = vec![agent(Kind::Scissors, 100.0, 100.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let (dx, dy) = steer(&rock, &prey, &[], &mut rng);
        assert!(dx.is_finite() && dy.is_finite());
        assert!(dx.abs() <= WANDER_RANGE);
        assert!(dy.abs() <= WANDER_RANGE);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let rock = agent(Kind::Rock, 100.0, 100.0);
        let prey = vec![agent(Kind::Scissors, 200.0, 150.0)];

        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);

        assert_eq!(
            steer(&rock, &prey, &[], &mut rng1),
            steer(&rock, &prey, &[], &mut rng2)
        );
    }
}
