mod board;
mod bot_controller;
mod error;
mod game_state;
pub mod logger;
mod session;
mod session_rng;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::{find_winning_move, select_move};
pub use error::GameError;
pub use game_state::GameState;
pub use session::GameSession;
pub use session_rng::SessionRng;
pub use types::{Difficulty, GameMode, GameStatus, Mark, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
