use crate::board::{Board, Mark};
use crate::error::EngineError;
use crate::log;
use crate::session_rng::SessionRng;
use super::bot_controller::calculate_move;
use super::difficulty::{Difficulty, HeuristicWeights};
use super::settings::EngineSettings;

/// Automated player: current settings plus the rng used by the random tier.
///
/// `choose_move` takes `&mut self`, so settings cannot change while a search
/// is running and only one search can be in flight per engine.
pub struct SearchEngine {
    settings: EngineSettings,
    rng: SessionRng,
}

impl SearchEngine {
    pub fn new(settings: EngineSettings, rng: SessionRng) -> Self {
        Self { settings, rng }
    }

    pub fn for_side(own: Mark, difficulty: Difficulty) -> Result<Self, EngineError> {
        let settings = EngineSettings::for_side(own, difficulty)?;
        Ok(Self::new(settings, SessionRng::from_random()))
    }

    pub fn own(&self) -> Mark {
        self.settings.own()
    }

    pub fn opponent(&self) -> Mark {
        self.settings.opponent()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty()
    }

    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        let chosen = calculate_move(&self.settings, board, &mut self.rng);
        match chosen {
            Some(index) => log!("{} ({}) chose cell {}", self.own(), self.difficulty(), index),
            None => log!("{} ({}) has no move: board is full", self.own(), self.difficulty()),
        }
        chosen
    }

    /// Engine plays `own` and the opponent the other mark.
    pub fn set_side(&mut self, own: Mark) -> Result<(), EngineError> {
        self.settings = self.settings.with_side(own)?;
        log!("Engine side set to {}", own);
        Ok(())
    }

    pub fn set_sides(&mut self, own: Mark, opponent: Mark) -> Result<(), EngineError> {
        self.settings = self.settings.with_sides(own, opponent)?;
        log!("Engine side set to {}, opponent {}", own, opponent);
        Ok(())
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), EngineError> {
        self.settings = self.settings.with_difficulty(difficulty)?;
        log!("Engine difficulty set to {}", difficulty);
        Ok(())
    }

    pub fn set_weights(&mut self, weights: HeuristicWeights) -> Result<(), EngineError> {
        self.settings = self.settings.with_weights(weights)?;
        log!("Engine weights set to +{} / -{}", weights.own_two, weights.opponent_two);
        Ok(())
    }
}
