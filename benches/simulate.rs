use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use thegame_sim::core::GameRng;
use thegame_sim::sim::{run_batch, simulate, BatchConfig};
use thegame_sim::strategy::StrategyKind;

fn bench_single_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    for kind in StrategyKind::ALL {
        for players in [1, 4, 7] {
            group.bench_with_input(BenchmarkId::new(kind.as_str(), players), &players, |b, &players| {
                let mut rng = GameRng::new(42);
                b.iter(|| simulate(black_box(players), &kind, &mut rng))
            });
        }
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let config = BatchConfig::default().with_repeats(10);
    c.bench_function("run_batch/10", |b| b.iter(|| run_batch(black_box(&config))));
}

criterion_group!(benches, bench_single_game, bench_batch);
criterion_main!(benches);
