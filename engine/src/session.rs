use crate::board::Board;
use crate::bot_controller::select_move;
use crate::error::GameError;
use crate::game_state::GameState;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, GameMode, GameStatus, Mark, WinningLine};

pub struct GameSession {
    mode: Option<GameMode>,
    difficulty: Difficulty,
    state: GameState,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(mode: GameMode, difficulty: Difficulty, rng: SessionRng) -> Self {
        Self {
            mode: Some(mode),
            difficulty,
            state: GameState::new(),
            rng,
        }
    }

    /// A session with no mode chosen yet; rejects moves until started.
    pub fn idle(difficulty: Difficulty, rng: SessionRng) -> Self {
        Self {
            mode: None,
            difficulty,
            state: GameState::new(),
            rng,
        }
    }

    pub fn start(&mut self, mode: GameMode) {
        self.mode = Some(mode);
        self.state = GameState::new();
    }

    /// Fresh board under the current mode; stays idle if no mode was ever chosen.
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn current_mark(&self) -> Mark {
        self.state.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.winning_line()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_some() && self.state.status == GameStatus::InProgress
    }

    pub fn human_move(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if !self.is_active() {
            return Err(GameError::invalid_move("No game in progress"));
        }
        self.state.place_mark(index)
    }

    pub fn computer_move(&mut self) -> Result<(usize, GameStatus), GameError> {
        if !self.is_active() {
            return Err(GameError::invalid_move("No game in progress"));
        }
        let index = select_move(
            &self.state.board,
            self.state.current_mark,
            self.difficulty,
            &mut self.rng,
        )?;
        let outcome = self.state.place_mark(index)?;
        Ok((index, outcome))
    }
}
