use crate::board::{Board, CELL_COUNT, GameStatus, Mark};
use crate::config::AppConfig;
use crate::error::EngineError;
use crate::log;
use crate::search::{DEFAULT_DEPTH_LIMIT, Difficulty, EngineSettings, SearchEngine};
use crate::session_rng::SessionRng;
use super::settings::{DifficultySelection, GameMode};

/// One game between a human and the engine, or between two humans.
///
/// X always moves first. The mark to move is tracked explicitly and handed
/// to the engine; it is never derived from the board.
pub struct GameSession {
    board: Board,
    mode: GameMode,
    human_mark: Mark,
    selection: DifficultySelection,
    active_difficulty: Difficulty,
    depth_limit: usize,
    engine: SearchEngine,
    current_mark: Mark,
    status: GameStatus,
}

impl GameSession {
    pub fn new(
        mode: GameMode,
        human_mark: Mark,
        difficulty: Difficulty,
        rng: SessionRng,
    ) -> Result<Self, EngineError> {
        let ai_mark = human_mark.opponent().ok_or(EngineError::EmptySide)?;
        let settings = EngineSettings::for_side(ai_mark, difficulty)?;
        let mut session = Self {
            board: Board::new(),
            mode,
            human_mark,
            selection: DifficultySelection::from_difficulty(difficulty),
            active_difficulty: difficulty,
            depth_limit: difficulty.depth_limit().unwrap_or(DEFAULT_DEPTH_LIMIT),
            engine: SearchEngine::new(settings, rng),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
        };
        if mode == GameMode::HumanVsHuman {
            session.selection = DifficultySelection::NotApplicable;
        }
        Ok(session)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, EngineError> {
        let settings = config.engine_settings()?;
        let mut session = Self::new(
            config.session.mode,
            config.session.human_mark,
            settings.difficulty(),
            SessionRng::from_optional_seed(config.seed),
        )?;
        session.depth_limit = config.engine.depth_limit;
        session.engine.set_weights(settings.weights())?;
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn ai_mark(&self) -> Mark {
        self.engine.own()
    }

    pub fn selection(&self) -> DifficultySelection {
        self.selection
    }

    pub fn active_difficulty(&self) -> Difficulty {
        self.active_difficulty
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.board.winning_line()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::HumanVsAi
            && !self.status.is_over()
            && self.current_mark == self.engine.own()
    }

    /// Places the mark of the player to move. In human-vs-AI mode only the
    /// human's turn is accepted.
    pub fn play_human(&mut self, index: usize) -> Result<(), String> {
        if self.mode == GameMode::HumanVsAi && self.current_mark != self.human_mark {
            return Err("Not your turn".to_string());
        }
        self.place_mark(index)
    }

    /// Lets the engine move on its turn. `Ok(None)` means the engine found
    /// no empty cell.
    pub fn play_ai(&mut self) -> Result<Option<usize>, String> {
        if self.mode != GameMode::HumanVsAi {
            return Err("There is no AI player in Human vs Human mode".to_string());
        }
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }
        if self.current_mark != self.engine.own() {
            return Err("It is not the AI's turn".to_string());
        }

        let snapshot = self.board;
        match self.engine.choose_move(&snapshot) {
            Some(index) if self.board.is_cell_empty(index) => {
                self.place_mark(index)?;
                Ok(Some(index))
            }
            Some(index) => Err(format!("Engine chose occupied cell {}", index)),
            None => {
                self.current_mark = self.human_mark;
                Ok(None)
            }
        }
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        if mode == GameMode::HumanVsHuman {
            self.selection = DifficultySelection::NotApplicable;
        } else if self.selection == DifficultySelection::NotApplicable {
            self.selection = DifficultySelection::Hard;
        }
        self.update_ai_settings();
        log!("Mode set to {}, difficulty {}", self.mode, self.selection);
    }

    /// `NotApplicable` keeps the engine on the last real difficulty.
    pub fn set_difficulty(&mut self, selection: DifficultySelection) {
        self.selection = selection;
        self.update_ai_settings();
    }

    /// Switching sides starts a fresh game with X to move.
    pub fn set_human_mark(&mut self, human_mark: Mark) -> Result<(), EngineError> {
        let ai_mark = human_mark.opponent().ok_or(EngineError::EmptySide)?;
        self.engine.set_side(ai_mark)?;
        self.human_mark = human_mark;
        log!("Human plays {}, AI plays {}", human_mark, ai_mark);
        if !self.status.is_over() {
            self.restart();
        }
        Ok(())
    }

    pub fn restart(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.update_ai_settings();
        log!("Game restarted");
    }

    fn update_ai_settings(&mut self) {
        let Some(difficulty) = self.selection.to_difficulty(self.depth_limit) else {
            return;
        };
        if self.engine.set_difficulty(difficulty).is_ok() {
            self.active_difficulty = difficulty;
        }
    }

    fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }
        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }
        if !self.board.is_cell_empty(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(index, self.current_mark);
        log!("{} takes cell {}", self.current_mark, index);

        self.status = self.board.winner();
        if self.status == GameStatus::InProgress {
            self.switch_turn();
        } else {
            log!("{}", self.status);
        }
        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
