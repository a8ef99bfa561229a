mod bot_controller;
mod difficulty;
mod engine;
mod evaluation;
mod minimax;
mod settings;

pub use bot_controller::calculate_move;
pub use difficulty::{DEFAULT_DEPTH_LIMIT, Difficulty, HeuristicWeights, MAX_WEIGHT};
pub use engine::SearchEngine;
pub use evaluation::{WIN_SCORE, evaluate, heuristic};
pub use minimax::{calculate_minimax_move, minimax, score_root_moves};
pub use settings::EngineSettings;
