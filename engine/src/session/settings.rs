use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::search::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsHuman,
    #[default]
    HumanVsAi,
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hvh" | "human-vs-human" => Ok(GameMode::HumanVsHuman),
            "hva" | "human-vs-ai" => Ok(GameMode::HumanVsAi),
            other => Err(format!("Unknown mode {:?}, expected hvh or hva", other)),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HumanVsHuman => write!(f, "Human vs Human"),
            GameMode::HumanVsAi => write!(f, "Human vs AI"),
        }
    }
}

/// Difficulty as offered to a player. `NotApplicable` is shown while two
/// humans play and is never handed to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DifficultySelection {
    Easy,
    Medium,
    #[default]
    Hard,
    NotApplicable,
}

impl DifficultySelection {
    pub fn to_difficulty(&self, depth_limit: usize) -> Option<Difficulty> {
        match self {
            DifficultySelection::Easy => Some(Difficulty::Random),
            DifficultySelection::Medium => Some(Difficulty::Bounded { depth_limit }),
            DifficultySelection::Hard => Some(Difficulty::Exact),
            DifficultySelection::NotApplicable => None,
        }
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Random => DifficultySelection::Easy,
            Difficulty::Bounded { .. } => DifficultySelection::Medium,
            Difficulty::Exact => DifficultySelection::Hard,
        }
    }
}

impl FromStr for DifficultySelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(DifficultySelection::Easy),
            "medium" => Ok(DifficultySelection::Medium),
            "hard" => Ok(DifficultySelection::Hard),
            "n/a" | "na" => Ok(DifficultySelection::NotApplicable),
            other => Err(format!(
                "Unknown difficulty {:?}, expected easy, medium or hard",
                other
            )),
        }
    }
}

impl fmt::Display for DifficultySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultySelection::Easy => write!(f, "Easy"),
            DifficultySelection::Medium => write!(f, "Medium"),
            DifficultySelection::Hard => write!(f, "Hard"),
            DifficultySelection::NotApplicable => write!(f, "N/A"),
        }
    }
}
