use tictactoe_engine::{Board, GameMode, GameSession, GameStatus, Mark, WinningLine};

pub fn render_board(board: &Board, winning_line: Option<&WinningLine>) -> String {
    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        for col in 0..3 {
            if col > 0 {
                out.push('|');
            }
            let index = row * 3 + col;
            out.push_str(&render_cell(board, winning_line, index));
        }
        out.push('\n');
    }
    out
}

fn render_cell(board: &Board, winning_line: Option<&WinningLine>, index: usize) -> String {
    let mark = board.cells()[index];
    if winning_line.is_some_and(|line| line.contains(index)) {
        return format!("({})", mark.symbol());
    }
    match mark {
        Mark::Empty => format!(" {} ", index),
        _ => format!(" {} ", mark.symbol()),
    }
}

pub fn status_message(session: &GameSession) -> String {
    if let Some(winner) = session.status().winner() {
        return format!("Player {} wins!", winner);
    }
    if session.status() == GameStatus::Draw {
        return "It's a tie!".to_string();
    }
    match session.mode() {
        None => "Select game mode to start".to_string(),
        Some(GameMode::Pvp) => format!("Current player: {}", session.current_mark()),
        Some(GameMode::Pvc) => match session.current_mark() {
            Mark::X => "Your turn (X)".to_string(),
            _ => "Computer thinking...".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Mark::{Empty as E, O, X};
    use tictactoe_engine::{Difficulty, SessionRng};

    #[test]
    fn test_render_empty_board_shows_cell_numbers() {
        let rendered = render_board(&Board::new(), None);
        assert!(rendered.contains(" 0 | 1 | 2 "));
        assert!(rendered.contains(" 6 | 7 | 8 "));
    }

    #[test]
    fn test_render_marks_and_winning_line() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        let line = WinningLine::new(X, [0, 1, 2]);
        let rendered = render_board(&board, Some(&line));
        assert!(rendered.contains("(X)|(X)|(X)"));
        assert!(rendered.contains(" O | O | 5 "));
    }

    #[test]
    fn test_status_messages() {
        let mut session =
            GameSession::new(GameMode::Pvc, Difficulty::Medium, SessionRng::new(42));
        assert_eq!(status_message(&session), "Your turn (X)");
        session.human_move(4).unwrap();
        assert_eq!(status_message(&session), "Computer thinking...");

        let mut pvp = GameSession::new(GameMode::Pvp, Difficulty::Medium, SessionRng::new(42));
        assert_eq!(status_message(&pvp), "Current player: X");
        for index in [0, 3, 1, 4, 2] {
            pvp.human_move(index).unwrap();
        }
        assert_eq!(status_message(&pvp), "Player X wins!");

        let idle = GameSession::idle(Difficulty::Medium, SessionRng::new(42));
        assert_eq!(status_message(&idle), "Select game mode to start");
    }
}
