use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{any_move_possible, apply_move, is_legal, slide_line, Board, GameState};
use tui_2048::types::{Direction, Tile};

fn busy_board() -> Board {
    Board::from_exponents([[1, 1, 2, 0], [3, 0, 3, 3], [0, 4, 4, 0], [5, 5, 5, 5]])
        .expect("valid exponents")
}

fn bench_slide_line(c: &mut Criterion) {
    let t = |e| Tile::new(e).expect("valid exponent");
    let line = [t(1), Tile::EMPTY, t(1), t(2)];

    c.bench_function("slide_line", |b| {
        b.iter(|| slide_line(black_box(line)))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("apply_move_all_directions", |b| {
        b.iter(|| {
            for d in Direction::ALL {
                let mut copy = black_box(board);
                black_box(apply_move(&mut copy, d));
            }
        })
    });
}

fn bench_legality(c: &mut Criterion) {
    let lost = Board::from_exponents([[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]])
        .expect("valid exponents");

    c.bench_function("is_legal", |b| {
        b.iter(|| is_legal(black_box(&busy_board()), Direction::Up))
    });
    c.bench_function("any_move_possible_lost_board", |b| {
        b.iter(|| any_move_possible(black_box(&lost)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_to_game_over", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(12345));
            let mut i = 0usize;
            while !state.game_over() {
                let _ = state.play(Direction::ALL[i % 4]);
                i += 1;
            }
            state.score()
        })
    });
}

criterion_group!(
    benches,
    bench_slide_line,
    bench_apply_move,
    bench_legality,
    bench_full_game
);
criterion_main!(benches);
