use crate::board::Board;
use crate::error::GameError;
use crate::types::{GameStatus, Mark, WinningLine};
use crate::win_detector::{check_win_with_line, evaluate};

#[derive(Clone, Copy, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::invalid_move("Game is already over"));
        }

        self.board = self.board.apply_move(index, self.current_mark)?;
        self.last_move = Some(index);
        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
