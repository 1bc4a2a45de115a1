//! # ROSHAMBO
//!
//! Cyclic-dominance ecosystem simulator: three populations of mobile agents
//! (rock, paper, scissors) chase their prey, flee their hunter and convert
//! what they catch, until one kind holds the entire arena.
//!
//! ## Features
//!
//! - **Deterministic**: seeded random number generation, single-threaded
//!   tick loop, fixed processing order
//! - **Conservative**: capture is a 1:1 conversion, the total population
//!   never changes
//! - **Configurable**: YAML configuration files
//! - **Headless**: the renderer, menus and score display are external
//!   consumers of [`World::snapshot`] and [`World::population_counts`]
//!
//! ## Quick Start
//!
//! ```rust
//! use roshambo::{Config, World};
//!
//! let config = Config::default();
//! let mut world = World::new_with_seed(config, 42).unwrap();
//!
//! world.run(1000);
//!
//! let [rocks, papers, scissors] = world.population_counts();
//! println!("rock {rocks} / paper {papers} / scissors {scissors}");
//! if let Some(kind) = world.winner() {
//!     println!("{kind} took the arena");
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use roshambo::Config;
//!
//! let mut config = Config::default();
//! config.agents.group_size = 50;
//! config.agents.speed = 4.0;
//! ```

pub mod agent;
pub mod boundary;
pub mod capture;
pub mod collision;
pub mod config;
pub mod spatial;
pub mod stats;
pub mod steering;
pub mod world;

// Re-export main types
pub use agent::{Agent, Kind, Matchup};
pub use config::Config;
pub use world::{AgentView, World};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark
pub fn benchmark(ticks: u64, group_size: usize) -> BenchmarkResult {
    use std::time::Instant;

    let mut config = Config::default();
    config.agents.group_size = group_size.max(1);

    let mut world = World::new(config).expect("default-derived config is valid");

    let start = Instant::now();
    world.run(ticks);
    let elapsed = start.elapsed();

    BenchmarkResult {
        ticks: world.time,
        group_size,
        final_counts: world.population_counts(),
        winner: world.winner(),
        elapsed_secs: elapsed.as_secs_f64(),
        ticks_per_second: world.time as f64 / elapsed.as_secs_f64(),
    }
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub ticks: u64,
    pub group_size: usize,
    pub final_counts: [usize; 3],
    pub winner: Option<Kind>,
    pub elapsed_secs: f64,
    pub ticks_per_second: f64,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Ticks: {}", self.ticks)?;
        writeln!(f, "Group size: {}", self.group_size)?;
        writeln!(
            f,
            "Final counts: R:{} P:{} S:{}",
            self.final_counts[0], self.final_counts[1], self.final_counts[2]
        )?;
        match self.winner {
            Some(kind) => writeln!(f, "Winner: {kind}")?,
            None => writeln!(f, "Winner: none")?,
        }
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} ticks/s", self.ticks_per_second)?;
        Ok(())
    }
}
