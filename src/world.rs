//! World simulation engine - main tick loop.

use crate::agent::{Agent, Kind, Matchup};
use crate::boundary::Arena;
use crate::capture::{self, CaptureEvent};
use crate::collision;
use crate::config::Config;
use crate::stats::{Stats, StatsHistory};
use crate::steering;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Read-only agent view handed to external renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub kind: Kind,
    pub x: f32,
    pub y: f32,
}

/// The simulation world: three populations chasing each other around a
/// square arena until one kind holds the entire population.
pub struct World {
    // Populations in Rock, Paper, Scissors order
    populations: [Vec<Agent>; 3],

    // Hunter/prey wiring, supplied at construction
    matchup: Matchup,

    // Arena geometry
    arena: Arena,

    // Configuration
    pub config: Config,

    // State
    pub time: u64,
    winner: Option<Kind>,

    // Statistics
    pub stats: Stats,
    pub stats_history: StatsHistory,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,

    // Captures applied in the most recent tick
    captures_this_tick: usize,
}

impl World {
    /// Create a new world with the given configuration and a random seed
    pub fn new(config: Config) -> Result<Self, String> {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(config, seed)
    }

    /// Create a new world with a specific seed for reproducibility
    pub fn new_with_seed(config: Config, seed: u64) -> Result<Self, String> {
        Self::with_matchup(config, Matchup::cyclic(), seed)
    }

    /// Create a new world with caller-supplied hunter/prey wiring
    pub fn with_matchup(config: Config, matchup: Matchup, seed: u64) -> Result<Self, String> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut populations = [Vec::new(), Vec::new(), Vec::new()];

        // Same placement as the original: a thin margin off every border
        let margin = (config.arena.size * 0.02).min(10.0);
        let low = margin;
        let high = config.arena.size - margin;

        for kind in Kind::ALL {
            let group = &mut populations[kind.index()];
            group.reserve(config.agents.group_size * 3);
            for _ in 0..config.agents.group_size {
                let x = rng.gen_range(low..high);
                let y = rng.gen_range(low..high);
                group.push(Agent::new(kind, x, y, config.agents.size, config.agents.speed));
            }
        }

        Ok(Self::assemble(config, matchup, populations, rng, seed))
    }

    /// Create a world from an explicit starting roster.
    ///
    /// Used by tests and by external controllers that restore a layout.
    /// The roster is grouped by kind; the conservation invariant then holds
    /// over whatever total was supplied. Roster agents are validated like
    /// the config: a degenerate agent is rejected here, never constructed.
    pub fn with_agents(
        config: Config,
        matchup: Matchup,
        agents: Vec<Agent>,
        seed: u64,
    ) -> Result<Self, String> {
        config.validate()?;

        for agent in &agents {
            if !agent.speed.is_finite() || agent.speed <= 0.0 {
                return Err(format!("roster {}: speed must be positive", agent.kind));
            }
            if !agent.size.is_finite() || agent.size <= 0.0 {
                return Err(format!("roster {}: size must be positive", agent.kind));
            }
            if agent.size + config.arena.bottom_margin >= config.arena.size {
                return Err(format!("roster {}: too large for the arena", agent.kind));
            }
            if !agent.x.is_finite() || !agent.y.is_finite() {
                return Err(format!("roster {}: position must be finite", agent.kind));
            }
        }

        let rng = ChaCha8Rng::seed_from_u64(seed);
        let mut populations = [Vec::new(), Vec::new(), Vec::new()];
        for agent in agents {
            populations[agent.kind.index()].push(agent);
        }

        Ok(Self::assemble(config, matchup, populations, rng, seed))
    }

    fn assemble(
        config: Config,
        matchup: Matchup,
        populations: [Vec<Agent>; 3],
        rng: ChaCha8Rng,
        seed: u64,
    ) -> Self {
        let arena = Arena::new(config.arena.size, config.arena.bottom_margin);
        let stats_interval = config.logging.stats_interval;

        let mut world = Self {
            populations,
            matchup,
            arena,
            config,
            time: 0,
            winner: None,
            stats: Stats::new(),
            stats_history: StatsHistory::new(stats_interval),
            rng,
            seed,
            captures_this_tick: 0,
        };

        world.update_stats();
        world
    }

    /// Advance the simulation by one tick.
    ///
    /// Processing order is fixed: Rock, Paper, Scissors, each population in
    /// insertion order. Captures detected during the pass are queued and
    /// applied afterwards, so no population mutates while it is iterated.
    /// A no-op once a winner is set.
    pub fn tick(&mut self) {
        if self.winner.is_some() {
            return;
        }

        // Tick-start positions, the reference for collision resolution
        let snapshots = self.position_snapshots();
        let mut events: Vec<CaptureEvent> = Vec::new();

        for kind in Kind::ALL {
            let prey_kind = self.matchup.prey_of(kind);
            let hunter_kind = self.matchup.hunter_of(kind);

            // Neither view mutates during this kind's pass: captures are
            // deferred and only `kind`'s own positions move here.
            let prey_view = self.populations[prey_kind.index()].clone();
            let hunter_view = self.populations[hunter_kind.index()].clone();
            let snapshot = &snapshots[kind.index()];

            let population = &mut self.populations[kind.index()];
            for index in 0..population.len() {
                let agent = &mut population[index];

                let (dx, dy) = steering::steer(agent, &prey_view, &hunter_view, &mut self.rng);
                agent.x += dx;
                agent.y += dy;

                self.arena.contain(agent);
                collision::resolve(agent, snapshot, index);
                // Collision pushes can cross the border; re-clamp so the
                // containment invariant holds at tick end.
                self.arena.clamp(agent);

                if let Some(prey_index) = capture::try_capture(agent, &prey_view) {
                    events.push(CaptureEvent {
                        hunter: kind,
                        prey: prey_kind,
                        prey_index,
                    });
                }
            }
        }

        self.captures_this_tick = self.apply_captures(&events);

        self.time += 1;
        self.check_winner();
        self.update_stats();
    }

    /// Replay queued captures: each prey index is consumed at most once
    /// (first queued event wins), the prey is removed order-preservingly and
    /// one agent of the hunter's kind spawns at its last position.
    fn apply_captures(&mut self, events: &[CaptureEvent]) -> usize {
        if events.is_empty() {
            return 0;
        }

        let mut captured: [Vec<bool>; 3] = [
            vec![false; self.populations[0].len()],
            vec![false; self.populations[1].len()],
            vec![false; self.populations[2].len()],
        ];
        let mut spawns: Vec<Agent> = Vec::with_capacity(events.len());

        for event in events {
            let flags = &mut captured[event.prey.index()];
            if flags[event.prey_index] {
                continue;
            }
            flags[event.prey_index] = true;

            let prey = &self.populations[event.prey.index()][event.prey_index];
            spawns.push(Agent::new(
                event.hunter,
                prey.x,
                prey.y,
                prey.size,
                prey.speed,
            ));
        }

        for kind in Kind::ALL {
            let flags = &captured[kind.index()];
            if flags.contains(&true) {
                let mut index = 0;
                self.populations[kind.index()].retain(|_| {
                    let keep = !flags[index];
                    index += 1;
                    keep
                });
            }
        }

        let applied = spawns.len();
        for agent in spawns {
            self.populations[agent.kind.index()].push(agent);
        }
        applied
    }

    /// A population holding everything ends the simulation
    fn check_winner(&mut self) {
        let target = self.config.agents.group_size * 3;
        for kind in Kind::ALL {
            if self.populations[kind.index()].len() == target {
                self.winner = Some(kind);
                log::info!("{} takes the arena at tick {}", kind, self.time);
            }
        }
    }

    /// Update statistics and record history at the configured interval
    fn update_stats(&mut self) {
        self.stats.time = self.time;
        self.stats
            .update(self.population_counts(), self.captures_this_tick, self.winner);

        if self.time % self.config.logging.stats_interval == 0 || self.winner.is_some() {
            self.stats_history.record(self.stats.clone());
        }
    }

    fn position_snapshots(&self) -> [Vec<(f32, f32)>; 3] {
        [
            self.populations[0].iter().map(|a| (a.x, a.y)).collect(),
            self.populations[1].iter().map(|a| (a.x, a.y)).collect(),
            self.populations[2].iter().map(|a| (a.x, a.y)).collect(),
        ]
    }

    /// Run the simulation for the given number of ticks (stops early once
    /// a winner is set)
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            if self.winner.is_some() {
                break;
            }
            self.tick();
        }
    }

    /// Run until a winner emerges or `max_ticks` elapse
    pub fn run_until_winner(&mut self, max_ticks: u64) -> Option<Kind> {
        for _ in 0..max_ticks {
            if self.winner.is_some() {
                break;
            }
            self.tick();
        }
        self.winner
    }

    /// Per-agent views for the external renderer
    pub fn snapshot(&self) -> Vec<AgentView> {
        self.populations
            .iter()
            .flatten()
            .map(|a| AgentView {
                kind: a.kind,
                x: a.x,
                y: a.y,
            })
            .collect()
    }

    /// Population sizes in Rock, Paper, Scissors order
    pub fn population_counts(&self) -> [usize; 3] {
        [
            self.populations[0].len(),
            self.populations[1].len(),
            self.populations[2].len(),
        ]
    }

    /// Agents of one kind
    pub fn agents_of(&self, kind: Kind) -> &[Agent] {
        &self.populations[kind.index()]
    }

    /// Total population count
    pub fn population(&self) -> usize {
        self.populations.iter().map(Vec::len).sum()
    }

    /// The winning kind, once terminal
    pub fn winner(&self) -> Option<Kind> {
        self.winner
    }

    /// Whether the simulation has reached its terminal state
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Captures applied in the most recent tick
    pub fn captures_this_tick(&self) -> usize {
        self.captures_this_tick
    }

    /// Get seed for reproducibility
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
