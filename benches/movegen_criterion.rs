use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use arbor_chess::game_state::game_state::GameState;
use arbor_chess::move_generation::legal_move_generator::generate_all_legal_moves;
use arbor_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812],
    },
];

fn bench_single_ply_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves_one_ply");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        // Correctness guard before benchmarking.
        assert_eq!(
            generate_all_legal_moves(&game).len() as u64,
            case.expected_nodes[0],
            "move count mismatch for {}",
            case.name
        );

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &game, |b, game| {
            b.iter(|| black_box(generate_all_legal_moves(black_box(game))).len());
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&game, depth).expect("perft should run");
            assert_eq!(
                warmup, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let nodes = perft(black_box(&bench_game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(nodes, *expected);
                        black_box(nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(movegen_benches, bench_single_ply_generation, bench_perft);
criterion_main!(movegen_benches);
