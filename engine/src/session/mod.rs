mod game_session;
mod settings;

pub use game_session::GameSession;
pub use settings::{DifficultySelection, GameMode};
