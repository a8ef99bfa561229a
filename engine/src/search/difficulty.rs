use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::CELL_COUNT;
use crate::error::EngineError;

/// Plies searched by the bounded tier before falling back to the heuristic.
pub const DEFAULT_DEPTH_LIMIT: usize = 3;

/// Upper bound for a single heuristic weight. Eight lines at this weight
/// still fit in an `i32`.
pub const MAX_WEIGHT: i32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Uniform choice among empty cells, no search.
    Random,
    /// Alpha-beta search cut off at `depth_limit` plies below the root move.
    Bounded { depth_limit: usize },
    /// Alpha-beta search to the end of every line of play.
    #[default]
    Exact,
}

impl Difficulty {
    pub fn bounded() -> Self {
        Difficulty::Bounded {
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }

    pub fn depth_limit(&self) -> Option<usize> {
        match self {
            Difficulty::Bounded { depth_limit } => Some(*depth_limit),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        match self {
            Difficulty::Bounded { depth_limit } if !(1..=CELL_COUNT).contains(depth_limit) => {
                Err(EngineError::InvalidDepthLimit(*depth_limit))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Random => write!(f, "random"),
            Difficulty::Bounded { depth_limit } => write!(f, "bounded(depth {})", depth_limit),
            Difficulty::Exact => write!(f, "exact"),
        }
    }
}

/// Scores awarded at the depth cutoff for a line that is one move from
/// completion. Offense outweighs blocking: +5 against -4 by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    pub own_two: i32,
    pub opponent_two: i32,
}

impl HeuristicWeights {
    /// An open pair of the engine's marks must score above an open pair of
    /// the opponent's, so at least one weight has to be positive.
    pub fn validate(&self) -> Result<(), EngineError> {
        let in_range = |weight: i32| (0..=MAX_WEIGHT).contains(&weight);
        let both_zero = self.own_two == 0 && self.opponent_two == 0;
        if !in_range(self.own_two) || !in_range(self.opponent_two) || both_zero {
            return Err(EngineError::InvalidWeights {
                own_two: self.own_two,
                opponent_two: self.opponent_two,
            });
        }
        Ok(())
    }
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            own_two: 5,
            opponent_two: 4,
        }
    }
}
