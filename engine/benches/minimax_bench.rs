use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::{
    Board, Difficulty, EngineSettings, GameStatus, Mark, SessionRng, calculate_move,
};

fn settings(own: Mark, difficulty: Difficulty) -> EngineSettings {
    EngineSettings::for_side(own, difficulty).unwrap()
}

fn bench_exact_self_play() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;
    let mut session_rng = SessionRng::new(0);

    while board.winner() == GameStatus::InProgress {
        let engine = settings(current_mark, Difficulty::Exact);
        match calculate_move(&engine, &board, &mut session_rng) {
            Some(index) => {
                board.place(index, current_mark);
                current_mark = current_mark.opponent().unwrap();
            }
            None => break,
        }
    }
}

fn bench_single_move_empty_board(difficulty: Difficulty) {
    let board = Board::new();
    let mut session_rng = SessionRng::new(0);
    black_box(calculate_move(&settings(Mark::X, difficulty), &board, &mut session_rng));
}

fn bench_single_move_mid_game(difficulty: Difficulty) {
    let board = Board::parse("X.. .O. ..X").unwrap();
    let mut session_rng = SessionRng::new(0);
    black_box(calculate_move(&settings(Mark::O, difficulty), &board, &mut session_rng));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("exact_self_play", |b| {
        b.iter(bench_exact_self_play)
    });

    group.bench_function("exact_single_move_empty", |b| {
        b.iter(|| bench_single_move_empty_board(Difficulty::Exact))
    });

    group.bench_function("bounded_single_move_empty", |b| {
        b.iter(|| bench_single_move_empty_board(Difficulty::bounded()))
    });

    group.bench_function("exact_single_move_mid_game", |b| {
        b.iter(|| bench_single_move_mid_game(Difficulty::Exact))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
