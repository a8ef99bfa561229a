use crate::board::Mark;
use crate::search::MAX_WEIGHT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidBoardLength { found: usize },
    InvalidCell { index: usize, value: String },
    EmptySide,
    SameSides(Mark),
    InvalidDepthLimit(usize),
    InvalidWeights { own_two: i32, opponent_two: i32 },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidBoardLength { found } => {
                write!(f, "Board must have exactly 9 cells, found {}", found)
            }
            EngineError::InvalidCell { index, value } => {
                write!(f, "Invalid value {:?} in cell {}", value, index)
            }
            EngineError::EmptySide => write!(f, "A side must be X or O, not empty"),
            EngineError::SameSides(mark) => {
                write!(f, "Engine and opponent cannot both play {}", mark)
            }
            EngineError::InvalidDepthLimit(limit) => {
                write!(f, "Depth limit must be between 1 and 9, got {}", limit)
            }
            EngineError::InvalidWeights {
                own_two,
                opponent_two,
            } => write!(
                f,
                "Heuristic weights must be between 0 and {} and not both zero, got {} and {}",
                MAX_WEIGHT, own_two, opponent_two
            ),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<EngineError> for String {
    fn from(e: EngineError) -> Self {
        e.to_string()
    }
}
