use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use minimax_chess::game_state::game_state::GameState;
use minimax_chess::search::board_scoring::StandardScorer;
use minimax_chess::search::minimax::{search_best_move, SearchConfig};

const POSITIONS: &[(&str, &str)] = &[
    (
        "start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "italian",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
    ),
    ("rook_endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for (name, fen) in POSITIONS {
        let game = GameState::from_fen(fen).expect("benchmark FEN should parse");

        for depth in 1..=3u8 {
            let config = SearchConfig::with_depth(depth);
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{name}_d{depth}")),
                &config,
                |b, config| {
                    b.iter(|| {
                        let result = search_best_move(black_box(&game), &StandardScorer, *config)
                            .expect("search should find a move");
                        black_box(result.best_move)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
