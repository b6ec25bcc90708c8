use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blocktris::core::{clear_lines, Board, GameState};
use blocktris::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if !state.is_running() {
                state.restart();
            }
            state.tick();
        })
    });
}

fn bench_advance_frame(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            if !state.is_running() {
                state.restart();
            }
            state.advance(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            clear_lines(black_box(&mut board))
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn_piece();
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    state.spawn_piece_at(PieceKind::T, 3);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::MoveRight));
            state.apply_action(black_box(GameAction::MoveLeft));
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    state.spawn_piece_at(PieceKind::T, 3);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::RotateCw));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_advance_frame,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
