use std::io::{self, BufRead, Write};

use tictactoe_engine::config::AppConfig;
use tictactoe_engine::{DifficultySelection, GameMode, GameSession, GameStatus, Mark, log};

use crate::render::render_board;

const HELP: &str = "Commands: 0-8 place a mark, d <easy|medium|hard> difficulty, \
                    s <X|O> switch sides, m <hvh|hva> mode, r restart, q quit";

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

pub fn run(
    config: &AppConfig,
    mode: Option<GameMode>,
    symbol: Option<Mark>,
    difficulty: Option<DifficultySelection>,
) -> Result<(), String> {
    let mut config = config.clone();
    if let Some(mode) = mode {
        config.session.mode = mode;
    }
    if let Some(symbol) = symbol {
        config.session.human_mark = symbol;
    }
    if let Some(difficulty) = difficulty {
        config.engine.difficulty = difficulty;
    }

    let mut session = GameSession::from_config(&config)?;
    log!(
        "Starting {} game, human plays {}, difficulty {}",
        session.mode(),
        session.human_mark(),
        session.selection()
    );

    println!("{}", HELP);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        advance_ai(&mut session)?;
        print!("{}", render_board(session.board()));
        println!("{}", status_line(&session));
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| e.to_string())?;
        match handle_command(&mut session, &line) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Continue) => {}
            Err(message) => println!("{}", message),
        }
    }

    Ok(())
}

/// Lets the engine move while it is its turn.
pub fn advance_ai(session: &mut GameSession) -> Result<(), String> {
    while session.is_ai_turn() {
        match session.play_ai()? {
            Some(index) => println!("AI ({}) takes cell {}", session.ai_mark(), index),
            None => break,
        }
    }
    Ok(())
}

pub fn handle_command(session: &mut GameSession, line: &str) -> Result<Outcome, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(Outcome::Continue);
    };
    let argument = parts.next();

    match (command, argument) {
        ("q", None) | ("quit", None) => return Ok(Outcome::Quit),
        ("r", None) | ("restart", None) => session.restart(),
        ("h", None) | ("help", None) => println!("{}", HELP),
        ("d", Some(level)) => session.set_difficulty(level.parse()?),
        ("s", Some(mark)) => session.set_human_mark(mark.parse()?)?,
        ("m", Some(mode)) => session.set_mode(mode.parse()?),
        (cell, None) => {
            let index = cell
                .parse::<usize>()
                .map_err(|_| format!("Unknown command {:?}. {}", line.trim(), HELP))?;
            session.play_human(index)?;
        }
        _ => return Err(format!("Unknown command {:?}. {}", line.trim(), HELP)),
    }

    Ok(Outcome::Continue)
}

pub fn status_line(session: &GameSession) -> String {
    match session.status() {
        GameStatus::InProgress => format!(
            "{} | difficulty {} | {} to move",
            session.mode(),
            session.selection(),
            session.current_mark()
        ),
        status => status.to_string(),
    }
}
