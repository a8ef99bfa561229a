use tictactoe_engine::config::AppConfig;
use tictactoe_engine::search::score_root_moves;
use tictactoe_engine::{
    Board, Difficulty, DifficultySelection, EngineSettings, Mark, SearchEngine, SessionRng,
};

use crate::render::render_board;

pub fn run(
    config: &AppConfig,
    board: &str,
    side: Option<Mark>,
    selection: Option<DifficultySelection>,
    seed: Option<u64>,
    explain: bool,
) -> Result<(), String> {
    let board = Board::parse(board)?;
    let settings = resolve_settings(config, side, selection)?;

    if explain {
        print!("{}", render_board(&board));
        if settings.difficulty() == Difficulty::Random {
            println!("random tier: every empty cell is equally likely");
        } else {
            let depth_limit = settings.difficulty().depth_limit();
            for (index, score) in score_root_moves(&board, &settings, depth_limit) {
                println!("cell {}: {}", index, score);
            }
        }
    }

    let rng = SessionRng::from_optional_seed(seed.or(config.seed));
    let mut engine = SearchEngine::new(settings, rng);
    match engine.choose_move(&board) {
        Some(index) => println!("{}", index),
        None => println!("none"),
    }
    Ok(())
}

pub fn resolve_settings(
    config: &AppConfig,
    side: Option<Mark>,
    selection: Option<DifficultySelection>,
) -> Result<EngineSettings, String> {
    let selection = selection.unwrap_or(config.engine.difficulty);
    let difficulty = selection
        .to_difficulty(config.engine.depth_limit)
        .ok_or_else(|| "The engine needs a difficulty of easy, medium or hard".to_string())?;
    let own = side.unwrap_or_else(|| config.ai_mark());

    let settings = EngineSettings::for_side(own, difficulty)?;
    Ok(settings.with_weights(config.engine.heuristic)?)
}
