pub mod board;
pub mod config;
pub mod error;
pub mod logger;
pub mod search;
pub mod session;
mod session_rng;

pub use board::{Board, GameStatus, LINES, Mark};
pub use error::EngineError;
pub use search::{Difficulty, EngineSettings, HeuristicWeights, SearchEngine, calculate_move};
pub use session::{DifficultySelection, GameMode, GameSession};
pub use session_rng::SessionRng;
