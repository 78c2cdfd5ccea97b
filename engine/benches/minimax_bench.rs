use std::time::Duration;

use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use tictactoe_engine::Mark::{Empty as E, O, X};
use tictactoe_engine::{Board, Difficulty, GameState, GameStatus, SessionRng, select_move};

fn bench_hard_empty_board() {
    let board = Board::new();
    let mut rng = SessionRng::new(7);
    select_move(&board, O, Difficulty::Hard, &mut rng).unwrap();
}

fn bench_hard_mid_game() {
    let board = Board::from_cells([X, O, E, E, X, E, E, E, O]);
    let mut rng = SessionRng::new(7);
    select_move(&board, X, Difficulty::Hard, &mut rng).unwrap();
}

fn bench_hard_self_play_game() {
    let mut rng = SessionRng::new(7);
    let mut state = GameState::new();
    while state.status == GameStatus::InProgress {
        let index = select_move(&state.board, state.current_mark, Difficulty::Hard, &mut rng).unwrap();
        state.place_mark(index).unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("empty_board", |b| b.iter(bench_hard_empty_board));

    group.bench_function("mid_game", |b| b.iter(bench_hard_mid_game));

    group.bench_function("self_play_game", |b| b.iter(bench_hard_self_play_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
