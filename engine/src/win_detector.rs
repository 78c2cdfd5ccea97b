use crate::board::Board;
use crate::types::{GameStatus, Mark, WinningLine};

// Rows, columns, diagonals. The medium bot relies on this scan order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> GameStatus {
    match check_win(board) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        Some(Mark::Empty) => unreachable!(),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
        assert_eq!(check_win_with_line(&Board::new()), None);
    }

    #[test]
    fn test_top_row_win() {
        let board = Board::from_cells([X, X, X, E, E, E, E, E, E]);
        assert_eq!(evaluate(&board), GameStatus::XWon);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, X);
        assert_eq!(line.cells, [0, 1, 2]);
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_cells([O, X, E, O, X, E, O, E, X]);
        assert_eq!(evaluate(&board), GameStatus::OWon);
        assert_eq!(check_win_with_line(&board).unwrap().cells, [0, 3, 6]);
    }

    #[test]
    fn test_diagonal_win() {
        let board = Board::from_cells([X, O, O, E, X, E, E, E, X]);
        assert_eq!(evaluate(&board), GameStatus::XWon);
        assert_eq!(check_win_with_line(&board).unwrap().cells, [0, 4, 8]);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);
        assert_eq!(evaluate(&board), GameStatus::Draw);
        assert_eq!(check_win_with_line(&board), None);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board = Board::from_cells([X, O, X, O, X, O, X, O, X]);
        assert_eq!(evaluate(&board), GameStatus::XWon);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        let first = evaluate(&board);
        let second = evaluate(&board);
        assert_eq!(first, second);
        assert_eq!(first, GameStatus::InProgress);
    }
}
