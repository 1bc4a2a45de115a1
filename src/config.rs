//! Configuration system for the simulation.
//!
//! Supports YAML configuration files with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub arena: ArenaConfig,
    pub agents: AgentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Arena geometry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Side length of the square arena
    pub size: f32,
    /// Strip at the bottom reserved for the external score display
    pub bottom_margin: f32,
}

/// Agent configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Number of agents per kind at start
    pub group_size: usize,
    /// Base movement magnitude per tick
    pub speed: f32,
    /// Bounding box side length
    pub size: f32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Ticks between stats recordings
    pub stats_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            agents: AgentConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            size: 500.0,
            bottom_margin: 40.0,
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            group_size: 30,
            speed: 2.0,
            size: 15.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stats_interval: 50,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !self.arena.size.is_finite() || self.arena.size <= 0.0 {
            return Err("arena size must be positive".to_string());
        }
        if !self.arena.bottom_margin.is_finite() || self.arena.bottom_margin < 0.0 {
            return Err("bottom_margin must be >= 0".to_string());
        }
        if self.agents.group_size == 0 {
            return Err("group_size must be > 0".to_string());
        }
        if !self.agents.speed.is_finite() || self.agents.speed <= 0.0 {
            return Err("speed must be positive".to_string());
        }
        if !self.agents.size.is_finite() || self.agents.size <= 0.0 {
            return Err("agent size must be positive".to_string());
        }
        if self.agents.size + self.arena.bottom_margin >= self.arena.size {
            return Err("arena too small for agent size plus bottom_margin".to_string());
        }
        if self.logging.stats_interval == 0 {
            return Err("stats_interval must be > 0".to_string());
        }
        Ok(())
    }
}
