use crate::board::Mark;
use crate::error::EngineError;
use super::difficulty::{Difficulty, HeuristicWeights};

/// Everything the engine needs to pick a move besides the board.
///
/// Values are immutable: every configuration change builds a new one through
/// the `with_*` methods, which reject invalid combinations up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineSettings {
    own: Mark,
    opponent: Mark,
    difficulty: Difficulty,
    weights: HeuristicWeights,
}

impl EngineSettings {
    pub fn new(own: Mark, opponent: Mark, difficulty: Difficulty) -> Result<Self, EngineError> {
        let settings = Self {
            own,
            opponent,
            difficulty,
            weights: HeuristicWeights::default(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Engine plays `own`, the opponent gets the other mark.
    pub fn for_side(own: Mark, difficulty: Difficulty) -> Result<Self, EngineError> {
        let opponent = own.opponent().ok_or(EngineError::EmptySide)?;
        Self::new(own, opponent, difficulty)
    }

    pub fn own(&self) -> Mark {
        self.own
    }

    pub fn opponent(&self) -> Mark {
        self.opponent
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn weights(&self) -> HeuristicWeights {
        self.weights
    }

    pub fn with_side(&self, own: Mark) -> Result<Self, EngineError> {
        let opponent = own.opponent().ok_or(EngineError::EmptySide)?;
        self.with_sides(own, opponent)
    }

    pub fn with_sides(&self, own: Mark, opponent: Mark) -> Result<Self, EngineError> {
        let settings = Self {
            own,
            opponent,
            ..*self
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_difficulty(&self, difficulty: Difficulty) -> Result<Self, EngineError> {
        let settings = Self {
            difficulty,
            ..*self
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_weights(&self, weights: HeuristicWeights) -> Result<Self, EngineError> {
        let settings = Self { weights, ..*self };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.own.is_empty() || self.opponent.is_empty() {
            return Err(EngineError::EmptySide);
        }
        if self.own == self.opponent {
            return Err(EngineError::SameSides(self.own));
        }
        self.difficulty.validate()?;
        self.weights.validate()
    }
}
