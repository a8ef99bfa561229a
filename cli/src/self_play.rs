use tictactoe_engine::config::AppConfig;
use tictactoe_engine::{Board, DifficultySelection, GameStatus, Mark, SearchEngine, SessionRng, log};

use crate::render::render_board;
use crate::suggest::resolve_settings;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

pub fn run(
    config: &AppConfig,
    x: DifficultySelection,
    o: DifficultySelection,
    games: u32,
    seed: Option<u64>,
) -> Result<(), String> {
    let seed = seed.or(config.seed);
    let rng = SessionRng::from_optional_seed(seed);
    log!("Self-play: X {} vs O {}, {} game(s), seed {}", x, o, games, rng.seed());

    let mut x_engine = SearchEngine::new(resolve_settings(config, Some(Mark::X), Some(x))?, rng);
    let mut o_engine = SearchEngine::new(
        resolve_settings(config, Some(Mark::O), Some(o))?,
        SessionRng::from_optional_seed(seed.map(|s| s.wrapping_add(1))),
    );

    let mut tally = Tally::default();
    for game in 0..games {
        let board = play_game(&mut x_engine, &mut o_engine);
        let status = board.winner();
        if games == 1 {
            print!("{}", render_board(&board));
        }
        log!("Game {}: {}", game + 1, status);
        tally.record(status);
    }

    println!(
        "X ({}) wins: {}, O ({}) wins: {}, draws: {}",
        x, tally.x_wins, o, tally.o_wins, tally.draws
    );
    Ok(())
}

pub fn play_game(x_engine: &mut SearchEngine, o_engine: &mut SearchEngine) -> Board {
    let mut board = Board::new();
    let mut to_move = Mark::X;

    while !board.winner().is_over() {
        let engine = if to_move == Mark::X {
            &mut *x_engine
        } else {
            &mut *o_engine
        };
        let Some(index) = engine.choose_move(&board) else {
            break;
        };
        board.place(index, to_move);
        to_move = if to_move == Mark::X { Mark::O } else { Mark::X };
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Difficulty, EngineSettings};

    fn engine(own: Mark, difficulty: Difficulty, seed: u64) -> SearchEngine {
        SearchEngine::new(
            EngineSettings::for_side(own, difficulty).unwrap(),
            SessionRng::new(seed),
        )
    }

    #[test]
    fn test_hard_vs_hard_draws() {
        let mut x = engine(Mark::X, Difficulty::Exact, 0);
        let mut o = engine(Mark::O, Difficulty::Exact, 0);
        assert_eq!(play_game(&mut x, &mut o).winner(), GameStatus::Draw);
    }

    #[test]
    fn test_tally_counts_results() {
        let mut tally = Tally::default();
        tally.record(GameStatus::XWon);
        tally.record(GameStatus::Draw);
        tally.record(GameStatus::Draw);
        tally.record(GameStatus::InProgress);
        assert_eq!(tally, Tally { x_wins: 1, o_wins: 0, draws: 2 });
    }

    #[test]
    fn test_games_end_with_result() {
        for seed in 0..10 {
            let mut x = engine(Mark::X, Difficulty::Random, seed);
            let mut o = engine(Mark::O, Difficulty::bounded(), seed);
            assert!(play_game(&mut x, &mut o).winner().is_over());
        }
    }
}
