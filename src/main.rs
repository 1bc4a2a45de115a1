//! ROSHAMBO - CLI Entry Point
//!
//! Headless runner for the cyclic-dominance simulation.

use clap::{Parser, Subcommand};
use roshambo::{benchmark, Config, World};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "roshambo")]
#[command(version)]
#[command(about = "Cyclic-dominance ecosystem simulator (rock / paper / scissors)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation until a winner emerges
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Maximum number of ticks to simulate
        #[arg(short, long, default_value = "1000000")]
        ticks: u64,

        /// Output directory for stats history
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of ticks
        #[arg(short, long, default_value = "1000")]
        ticks: u64,

        /// Agents per kind
        #[arg(short, long, default_value = "100")]
        group_size: usize,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            ticks,
            output,
            seed,
            quiet,
        } => run_simulation(config, ticks, output, seed, quiet),

        Commands::Benchmark { ticks, group_size } => run_benchmark(ticks, group_size),

        Commands::Init { output } => generate_config(output),
    }
}

fn run_simulation(
    config_path: PathBuf,
    ticks: u64,
    output: PathBuf,
    seed: Option<u64>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let config = if config_path.exists() {
        println!("Loading config from: {:?}", config_path);
        Config::from_file(&config_path)?
    } else {
        println!("Using default configuration");
        Config::default()
    };

    std::fs::create_dir_all(&output)?;

    let mut world = if let Some(s) = seed {
        println!("Using seed: {}", s);
        World::new_with_seed(config.clone(), s)?
    } else {
        World::new(config.clone())?
    };

    println!("Starting simulation");
    println!("  Group size: {} per kind", config.agents.group_size);
    println!(
        "  Arena: {}x{} (bottom margin {})",
        config.arena.size, config.arena.size, config.arena.bottom_margin
    );
    println!("  Speed: {}", config.agents.speed);
    println!("  Max ticks: {}", ticks);
    println!();

    let start = Instant::now();
    let stats_interval = config.logging.stats_interval;

    for _ in 0..ticks {
        world.tick();

        if !quiet && world.time % stats_interval == 0 {
            println!("{}", world.stats.summary());
        }

        if world.is_terminal() {
            break;
        }
    }

    let elapsed = start.elapsed();
    let ticks_per_sec = world.time as f64 / elapsed.as_secs_f64();

    println!();
    println!("=== Simulation Complete ===");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Ticks: {}", world.time);
    println!("Speed: {:.1} ticks/s", ticks_per_sec);
    let [rocks, papers, scissors] = world.population_counts();
    println!("Final counts: R:{} P:{} S:{}", rocks, papers, scissors);
    match world.winner() {
        Some(kind) => println!("Winner: {kind}"),
        None => println!("Winner: none (tick limit reached)"),
    }

    // Save stats history
    let stats_path = output.join("stats_history.json");
    world
        .stats_history
        .save(stats_path.to_str().ok_or("invalid output path")?)?;
    println!("Stats history: {:?}", stats_path);

    Ok(())
}

fn run_benchmark(ticks: u64, group_size: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== ROSHAMBO Benchmark ===");
    println!("Ticks: {}", ticks);
    println!("Group size: {}", group_size);
    println!();

    let result = benchmark(ticks, group_size);
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
