use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use laser_chess::game_state::laser_types::Player;
use laser_chess::move_generation::legal_move_generator::MoveFilter;
use laser_chess::search::board_scoring::{BoardScorer, LaserHeuristicScorer};
use laser_chess::search::minimax::{search_with, SearchConfig};

mod common;

fn bench_evaluate(c: &mut Criterion) {
    let game = common::ace_game();
    let scorer = LaserHeuristicScorer::default();
    c.bench_function("evaluate_ace", |b| {
        b.iter(|| scorer.score(black_box(&game), Player::First))
    });
}

fn bench_search(c: &mut Criterion) {
    let game = common::ace_game();
    let scorer = LaserHeuristicScorer::default();
    let mut group = c.benchmark_group("search_ace");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(8));

    for (label, move_filter) in [
        ("all", MoveFilter::AllLegal),
        ("laser", MoveFilter::LaserChanging),
    ] {
        for depth in 1..=2u8 {
            let config = SearchConfig { depth, move_filter };
            group.bench_with_input(
                BenchmarkId::new(label, depth),
                &config,
                |b, &config| b.iter(|| search_with(black_box(&game), Player::First, &scorer, config)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_search);
criterion_main!(benches);
