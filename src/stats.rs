//! Statistics tracking for the simulation.

use crate::agent::Kind;
use serde::{Deserialize, Serialize};

/// Statistics snapshot for a simulation tick
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Current simulation time
    pub time: u64,
    /// Rock population count
    pub rocks: usize,
    /// Paper population count
    pub papers: usize,
    /// Scissors population count
    pub scissors: usize,
    /// Total population (invariant: 3 * group_size)
    pub total: usize,
    /// Captures applied this tick
    pub captures: usize,
    /// Winning kind, once the simulation is terminal
    pub winner: Option<Kind>,
}

impl Stats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats from current population counts
    pub fn update(&mut self, counts: [usize; 3], captures: usize, winner: Option<Kind>) {
        self.rocks = counts[0];
        self.papers = counts[1];
        self.scissors = counts[2];
        self.total = counts.iter().sum();
        self.captures = captures;
        self.winner = winner;
    }

    /// Format stats as a one-line summary
    pub fn summary(&self) -> String {
        match self.winner {
            Some(kind) => format!(
                "T:{:6} | R:{:4} P:{:4} S:{:4} | winner: {}",
                self.time, self.rocks, self.papers, self.scissors, kind
            ),
            None => format!(
                "T:{:6} | R:{:4} P:{:4} S:{:4} | captures: {}",
                self.time, self.rocks, self.papers, self.scissors, self.captures
            ),
        }
    }
}

/// Historical statistics tracker
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsHistory {
    /// All recorded stats snapshots
    pub snapshots: Vec<Stats>,
    /// Recording interval
    pub interval: u64,
}

impl StatsHistory {
    /// Create new history with recording interval
    pub fn new(interval: u64) -> Self {
        Self {
            snapshots: Vec::new(),
            interval,
        }
    }

    /// Record a stats snapshot
    pub fn record(&mut self, stats: Stats) {
        self.snapshots.push(stats);
    }

    /// Get per-kind population over time
    pub fn counts_series(&self) -> Vec<(u64, [usize; 3])> {
        self.snapshots
            .iter()
            .map(|s| (s.time, [s.rocks, s.papers, s.scissors]))
            .collect()
    }

    /// Get capture counts over time
    pub fn captures_series(&self) -> Vec<(u64, usize)> {
        self.snapshots.iter().map(|s| (s.time, s.captures)).collect()
    }

    /// Save history to file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)
    }

    /// Load history from file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_update() {
        let mut stats = Stats::new();
        stats.time = 10;
        stats.update([40, 30, 20], 2, None);

        assert_eq!(stats.total, 90);
        assert_eq!(stats.rocks, 40);
        assert_eq!(stats.captures, 2);
        assert!(stats.summary().contains("R:  40"));
    }

    #[test]
    fn test_summary_shows_winner() {
        let mut stats = Stats::new();
        stats.update([90, 0, 0], 0, Some(Kind::Rock));

        assert!(stats.summary().contains("winner: rock"));
    }

    #[test]
    fn test_stats_history() {
        let mut history = StatsHistory::new(10);

        for i in 0..5u64 {
            let mut stats = Stats::new();
            stats.time = i * 10;
            stats.update([30 + i as usize, 30, 30 - i as usize], 1, None);
            history.record(stats);
        }

        let series = history.counts_series();
        assert_eq!(series.len(), 5);
        assert_eq!(series[0], (0, [30, 30, 30]));
        assert_eq!(series[4], (40, [34, 30, 26]));
    }
}
