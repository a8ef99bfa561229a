use crate::board::Board;
use crate::session_rng::SessionRng;
use super::difficulty::Difficulty;
use super::minimax::calculate_minimax_move;
use super::settings::EngineSettings;

/// Picks a cell for `settings.own()` on `board`, `None` when the board is full.
///
/// The board is only read; searches run on a private copy.
pub fn calculate_move(
    settings: &EngineSettings,
    board: &Board,
    rng: &mut SessionRng,
) -> Option<usize> {
    match settings.difficulty() {
        Difficulty::Random => calculate_random_move(board, rng),
        Difficulty::Bounded { depth_limit } => {
            calculate_minimax_move(board, settings, Some(depth_limit))
        }
        Difficulty::Exact => calculate_minimax_move(board, settings, None),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.available_cells();
    rng.pick(&available_moves)
}
