use crate::board::{Board, LINES, Mark};
use super::settings::EngineSettings;

pub const WIN_SCORE: i32 = 10;

/// Terminal score from the engine's point of view: +10 won, -10 lost,
/// 0 for a draw or a game still in progress.
pub fn evaluate(board: &Board, settings: &EngineSettings) -> i32 {
    match board.winner().winner() {
        Some(mark) if mark == settings.own() => WIN_SCORE,
        Some(mark) if mark == settings.opponent() => -WIN_SCORE,
        _ => 0,
    }
}

/// Static score used at the depth cutoff: every line holding two of the
/// engine's marks and an empty cell adds `own_two`, every line holding two
/// opponent marks and an empty cell subtracts `opponent_two`.
pub fn heuristic(board: &Board, settings: &EngineSettings) -> i32 {
    let weights = settings.weights();
    let mut score = 0;

    for line in LINES {
        let mut own = 0;
        let mut opponent = 0;
        let mut empty = 0;
        for index in line {
            match board.cells()[index] {
                Mark::Empty => empty += 1,
                mark if mark == settings.own() => own += 1,
                mark if mark == settings.opponent() => opponent += 1,
                _ => {}
            }
        }

        if empty == 1 {
            if own == 2 {
                score += weights.own_two;
            }
            if opponent == 2 {
                score -= weights.opponent_two;
            }
        }
    }

    score
}
