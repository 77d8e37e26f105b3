use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use knightfall::engines::engine_ladder::build_engine;
use knightfall::engines::engine_trait::GoParams;
use knightfall::search::board_scoring::{EndgameTaperedScorer, StandardScorer};
use knightfall::search::iterative_deepening::{find_best_move, SearchConfig};
use knightfall::search::search_thread::start_search;
use knightfall::utils::fen_parser::parse_fen;

const CASES: &[(&str, &str)] = &[
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
    (
        "classical_mid",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    ),
    (
        "tactical",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("end_kpk", "8/8/8/8/8/4k3/4P3/4K3 w - - 0 1"),
];

/// Search depth, overridable with `KNIGHTFALL_BENCH_DEPTH`.
fn bench_depth() -> u8 {
    std::env::var("KNIGHTFALL_BENCH_DEPTH")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(3)
        .max(1)
}

fn bench_find_best_move(c: &mut Criterion) {
    let depth = bench_depth();
    let mut group = c.benchmark_group("find_best_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    let config = SearchConfig {
        max_depth: depth,
        seed: Some(1),
        ..SearchConfig::default()
    };

    for &(name, fen) in CASES {
        let game = parse_fen(fen).expect("benchmark FEN should parse");
        let legal = game.legal_moves();

        group.bench_with_input(BenchmarkId::new(format!("{name}_standard"), depth), &game, |b, game| {
            b.iter(|| black_box(find_best_move(game, &legal, &StandardScorer, &config).nodes))
        });
        group.bench_with_input(BenchmarkId::new(format!("{name}_endgame"), depth), &game, |b, game| {
            b.iter(|| black_box(find_best_move(game, &legal, &EndgameTaperedScorer, &config).nodes))
        });
    }

    group.finish();
}

/// Round trip through the worker thread, including spawn and channel cost.
fn bench_threaded_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("threaded_search");
    group.sample_size(10);

    let game = parse_fen(CASES[0].1).expect("benchmark FEN should parse");
    let legal = game.legal_moves();
    let params = GoParams {
        depth: Some(2),
        seed: Some(1),
        ..GoParams::default()
    };

    for skill in [1u8, 4, 7] {
        group.bench_with_input(BenchmarkId::new("skill", skill), &skill, |b, &skill| {
            b.iter(|| {
                let engine = build_engine(skill).expect("skill in range");
                let mut handle = start_search(game.clone(), legal.clone(), engine, params)
                    .expect("worker should start");
                black_box(handle.wait())
            })
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_find_best_move, bench_threaded_search);
criterion_main!(search_benches);
