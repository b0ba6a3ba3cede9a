use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Bounds, GameState, Rules};
use blockfall::types::{Command, Direction, PieceKind};

fn new_game() -> GameState {
    let mut state = GameState::new(Rules::default(), 12345);
    state.start();
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = new_game();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16), &[]);
        })
    });
}

fn bench_tick_with_commands(c: &mut Criterion) {
    let mut state = new_game();
    let commands = [Command::MoveLeft, Command::RotateCw, Command::SoftDrop];

    c.bench_function("game_tick_commands", |b| {
        b.iter(|| {
            state.tick(black_box(16), black_box(&commands));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(Bounds::centered(10, 20));
            // Fill bottom 4 rows
            for y in -10..-6 {
                for x in -5..5 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = new_game();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn_piece();
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = new_game();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(1, 0);
            state.try_move(-1, 0);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = new_game();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.try_rotate(Direction::Clockwise);
        })
    });
}

fn bench_ghost(c: &mut Criterion) {
    let state = new_game();

    c.bench_function("ghost_projection", |b| {
        b.iter(|| black_box(state.ghost()))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_tick_with_commands,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate,
    bench_ghost
);
criterion_main!(benches);
