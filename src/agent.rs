//! Agent data model: kinds, hunter/prey wiring and the agent record itself.

use serde::{Deserialize, Serialize};

/// The three contender kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Rock,
    Paper,
    Scissors,
}

impl Kind {
    /// All kinds in the fixed processing order used by the simulation.
    pub const ALL: [Kind; 3] = [Kind::Rock, Kind::Paper, Kind::Scissors];

    /// Stable index into per-kind arrays (population vectors, counts).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Kind::Rock => 0,
            Kind::Paper => 1,
            Kind::Scissors => 2,
        }
    }

    /// Lowercase name, matching the original sprite naming.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Rock => "rock",
            Kind::Paper => "paper",
            Kind::Scissors => "scissors",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hunter/prey wiring between the three kinds.
///
/// The engine never decides who hunts whom; the table is supplied at world
/// construction. `prey[kind]` is what `kind` chases and converts,
/// `hunter[kind]` is derived as the inverse relation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Matchup {
    prey: [Kind; 3],
    hunter: [Kind; 3],
}

impl Matchup {
    /// Build a matchup from a prey table indexed by [`Kind::index`].
    ///
    /// The table must be a fixed-point-free permutation of the three kinds,
    /// otherwise some kind would hunt itself or nobody would hunt it.
    pub fn new(prey: [Kind; 3]) -> Result<Self, String> {
        let mut hunter = [Kind::Rock; 3];
        let mut hunted = [false; 3];

        for kind in Kind::ALL {
            let target = prey[kind.index()];
            if target == kind {
                return Err(format!("{kind} cannot prey on itself"));
            }
            if hunted[target.index()] {
                return Err(format!("{target} has more than one hunter"));
            }
            hunted[target.index()] = true;
            hunter[target.index()] = kind;
        }

        Ok(Self { prey, hunter })
    }

    /// The classic table: rock crushes scissors, paper wraps rock,
    /// scissors cut paper.
    pub fn cyclic() -> Self {
        Self {
            prey: [Kind::Scissors, Kind::Rock, Kind::Paper],
            hunter: [Kind::Paper, Kind::Scissors, Kind::Rock],
        }
    }

    /// What `kind` chases.
    #[inline]
    pub fn prey_of(&self, kind: Kind) -> Kind {
        self.prey[kind.index()]
    }

    /// What `kind` flees from.
    #[inline]
    pub fn hunter_of(&self, kind: Kind) -> Kind {
        self.hunter[kind.index()]
    }
}

impl Default for Matchup {
    fn default() -> Self {
        Self::cyclic()
    }
}

/// One creature in the arena.
///
/// Position is the top-left corner of the bounding box, continuous
/// coordinates. The box is square with side `size`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub kind: Kind,
    pub x: f32,
    pub y: f32,
    /// Bounding extent, shared by rendering hand-off and capture hit-testing.
    pub size: f32,
    /// Base movement magnitude per tick.
    pub speed: f32,
}

impl Agent {
    pub fn new(kind: Kind, x: f32, y: f32, size: f32, speed: f32) -> Self {
        Self {
            kind,
            x,
            y,
            size,
            speed,
        }
    }

    /// Center of the bounding box.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }

    /// Per-axis offset from this agent to `other` (positive means `other`
    /// lies in the positive direction).
    #[inline]
    pub fn offset_to(&self, other: &Agent) -> (f32, f32) {
        (other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Agent) -> f32 {
        let (dx, dy) = self.offset_to(other);
        (dx * dx + dy * dy).sqrt()
    }

    /// Axis-aligned bounding box overlap against a raw position with the
    /// same extent.
    #[inline]
    pub fn overlaps_at(&self, x: f32, y: f32) -> bool {
        self.x < x + self.size
            && x < self.x + self.size
            && self.y < y + self.size
            && y < self.y + self.size
    }
}
