use crate::board::Board;
use super::evaluation::{WIN_SCORE, evaluate, heuristic};
use super::settings::EngineSettings;

/// Scores every empty cell as a root move for the engine, in ascending cell
/// order. Each candidate gets a fresh full alpha-beta window.
pub fn score_root_moves(
    input: &Board,
    settings: &EngineSettings,
    depth_limit: Option<usize>,
) -> Vec<(usize, i32)> {
    let mut board = *input;
    let available_moves = board.available_cells();
    let mut scores = Vec::with_capacity(available_moves.len());

    for index in available_moves {
        board.place(index, settings.own());
        let score = minimax(&mut board, settings, 0, false, i32::MIN, i32::MAX, depth_limit);
        board.clear(index);
        debug_assert_eq!(board, *input, "search must restore the board");

        scores.push((index, score));
    }

    scores
}

/// Best root move; ties go to the lowest cell index.
pub fn calculate_minimax_move(
    board: &Board,
    settings: &EngineSettings,
    depth_limit: Option<usize>,
) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for (index, score) in score_root_moves(board, settings, depth_limit) {
        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Alpha-beta minimax. Terminal positions are scored before the depth
/// cutoff is considered; below the cutoff the heuristic is used. Every mark
/// placed on `board` is removed before returning.
pub fn minimax(
    board: &mut Board,
    settings: &EngineSettings,
    depth: usize,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    depth_limit: Option<usize>,
) -> i32 {
    let score = evaluate(board, settings);
    if score.abs() == WIN_SCORE || board.is_full() {
        return score;
    }

    if depth_limit.is_some_and(|limit| depth >= limit) {
        return heuristic(board, settings);
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in board.available_cells() {
            board.place(index, settings.own());
            let eval = minimax(board, settings, depth + 1, false, alpha, beta, depth_limit);
            board.clear(index);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(max_eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in board.available_cells() {
            board.place(index, settings.opponent());
            let eval = minimax(board, settings, depth + 1, true, alpha, beta, depth_limit);
            board.clear(index);

            min_eval = min_eval.min(eval);
            beta = beta.min(min_eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
