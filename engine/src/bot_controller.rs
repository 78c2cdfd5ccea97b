use crate::board::Board;
use crate::error::GameError;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, GameStatus, Mark};
use crate::win_detector::{WINNING_LINES, evaluate};

// The medium bot deliberately blunders 20% of the time.
const TACTICAL_MOVE_PROBABILITY: f64 = 0.8;

const WIN_SCORE: i32 = 10;

pub fn select_move(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    let opponent = mark
        .opponent()
        .ok_or_else(|| GameError::invalid_move("Only X or O can move"))?;

    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => {
            let play_tactically = rng.random_bool(TACTICAL_MOVE_PROBABILITY);
            calculate_heuristic_move(board, mark, opponent, play_tactically, rng)
        }
        Difficulty::Hard => calculate_minimax_move(board, mark, opponent),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<usize, GameError> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }
    Ok(available_moves[rng.random_range(0..available_moves.len())])
}

fn calculate_heuristic_move(
    board: &Board,
    mark: Mark,
    opponent: Mark,
    play_tactically: bool,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    if play_tactically {
        if let Some(index) = find_winning_move(board, mark) {
            return Ok(index);
        }
        if let Some(index) = find_winning_move(board, opponent) {
            return Ok(index);
        }
    }
    calculate_random_move(board, rng)
}

pub fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    let cells = board.cells();
    for [a, b, c] in WINNING_LINES {
        if cells[a] == mark && cells[b] == mark && cells[c] == Mark::Empty {
            return Some(c);
        }
        if cells[a] == mark && cells[c] == mark && cells[b] == Mark::Empty {
            return Some(b);
        }
        if cells[b] == mark && cells[c] == mark && cells[a] == Mark::Empty {
            return Some(a);
        }
    }
    None
}

fn calculate_minimax_move(
    board: &Board,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> Result<usize, GameError> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.available_moves() {
        let candidate = board.with_mark(index, bot_mark);
        let score = minimax(&candidate, 0, false, bot_mark, opponent_mark);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or(GameError::NoLegalMove)
}

// Scores from the bot's point of view; earlier wins and later losses
// score better, so the search prefers quick wins and delayed losses.
fn minimax(board: &Board, depth: i32, maximizing: bool, bot_mark: Mark, opponent_mark: Mark) -> i32 {
    let status = evaluate(board);
    if let Some(winner) = status.winner() {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }
    if status == GameStatus::Draw {
        return 0;
    }

    if maximizing {
        let mut best = i32::MIN;
        for index in board.available_moves() {
            let next = board.with_mark(index, bot_mark);
            best = best.max(minimax(&next, depth + 1, false, bot_mark, opponent_mark));
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in board.available_moves() {
            let next = board.with_mark(index, opponent_mark);
            best = best.min(minimax(&next, depth + 1, true, bot_mark, opponent_mark));
        }
        best
    }
}
