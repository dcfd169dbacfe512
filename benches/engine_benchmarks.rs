//! Benchmarks for move generation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::board::{run_search, Position, Pruning, SearchConfig};
use mailbox_chess::sync::StopFlag;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    // Starting position
    let mut position = Position::new();

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| position.perft(black_box(depth)))
        });
    }

    // Complex middlegame position (Kiwipete)
    let mut kiwipete = Position::from_fen(KIWIPETE).unwrap();

    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Position::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.valid_moves())));

    let mut middlegame =
        Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
            .unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.valid_moves()))
    });

    // Many moves available
    let mut kiwipete = Position::from_fen(KIWIPETE).unwrap();
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.valid_moves())));

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    let stop = StopFlag::new();

    for (name, pruning) in [("alphabeta", Pruning::AlphaBeta), ("negamax", Pruning::None)] {
        for depth in [2, 3] {
            let config = SearchConfig::default()
                .with_depth(depth)
                .with_pruning(pruning)
                .with_shuffle(false);
            group.bench_with_input(BenchmarkId::new(name, depth), &config, |b, config| {
                b.iter(|| {
                    let mut position = Position::new();
                    let moves = position.valid_moves();
                    run_search(&mut position, moves.as_slice(), config, &stop)
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_search);
criterion_main!(benches);
