mod play;
mod render;
mod self_play;
mod suggest;

use clap::{Parser, Subcommand};
use tictactoe_engine::config::{AppConfig, DEFAULT_CONFIG_FILE, get_config_manager};
use tictactoe_engine::{DifficultySelection, GameMode, Mark, log, logger};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe move engine")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Do not write log lines to stderr.
    #[arg(long)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the engine's move for a board, or `none` when the board is full.
    Suggest {
        /// Nine cells, row by row: X, O, and `.` for empty, e.g. "XX./.O./..O".
        #[arg(long)]
        board: String,
        /// Side the engine plays. Defaults to the opposite of the configured human mark.
        #[arg(long)]
        side: Option<Mark>,
        #[arg(long)]
        difficulty: Option<DifficultySelection>,
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the score of every candidate cell.
        #[arg(long)]
        explain: bool,
    },
    /// Let the engine play against itself.
    SelfPlay {
        #[arg(long, default_value = "hard")]
        x: DifficultySelection,
        #[arg(long, default_value = "hard")]
        o: DifficultySelection,
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play in the terminal.
    Play {
        #[arg(long)]
        mode: Option<GameMode>,
        /// Mark the human plays.
        #[arg(long)]
        symbol: Option<Mark>,
        #[arg(long)]
        difficulty: Option<DifficultySelection>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if !args.quiet {
        let prefix = if args.use_log_prefix {
            Some("TicTacToe".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config: AppConfig = get_config_manager(&args.config).load()?;
    log!("Loaded config from {}", args.config);

    match args.command {
        Command::Suggest {
            board,
            side,
            difficulty,
            seed,
            explain,
        } => suggest::run(&config, &board, side, difficulty, seed, explain)?,
        Command::SelfPlay { x, o, games, seed } => self_play::run(&config, x, o, games, seed)?,
        Command::Play {
            mode,
            symbol,
            difficulty,
        } => play::run(&config, mode, symbol, difficulty)?,
    }

    Ok(())
}
