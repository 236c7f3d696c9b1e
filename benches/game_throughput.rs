//! Benchmarks for game simulation throughput.
//!
//! Run with: cargo bench --bench game_throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use monopoly_sim::{simulate_batch, simulate_game, GameConfig, GameRng};

/// Benchmark a single game at several table sizes
fn bench_single_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_game");

    for players in [2usize, 4, 8, 15] {
        let config = GameConfig::new(players);
        group.bench_with_input(BenchmarkId::from_parameter(players), &config, |b, config| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                black_box(simulate_game(config.clone(), GameRng::new(seed)))
            })
        });
    }

    group.finish();
}

/// Benchmark a parallel batch of 15-player games
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let config = GameConfig::new(15).with_free_parking_bonus(true);
    let games = 256;

    group.throughput(Throughput::Elements(games as u64));
    group.bench_function("15_players_256_games", |b| {
        b.iter(|| black_box(simulate_batch(&config, games, 42)))
    });

    group.finish();
}

criterion_group!(benches, bench_single_game, bench_batch);
criterion_main!(benches);
