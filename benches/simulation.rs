//! Performance benchmarks for ROSHAMBO

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roshambo::{spatial, steering, Agent, Config, Kind, World};

fn benchmark_world_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_tick");

    for group_size in [30, 100, 300].iter() {
        let mut config = Config::default();
        config.agents.group_size = *group_size;

        let mut world = World::new_with_seed(config, 42).unwrap();

        // Warm up
        world.run(10);

        group.bench_with_input(
            BenchmarkId::new("group_size", group_size),
            group_size,
            |b, _| {
                b.iter(|| {
                    world.tick();
                });
            },
        );
    }

    group.finish();
}

fn benchmark_nearest(c: &mut Criterion) {
    let candidates: Vec<Agent> = (0..300)
        .map(|i| {
            let x = (i * 37 % 500) as f32;
            let y = (i * 91 % 460) as f32;
            Agent::new(Kind::Scissors, x, y, 15.0, 2.0)
        })
        .collect();

    c.bench_function("nearest_300", |b| {
        b.iter(|| spatial::nearest(black_box(250.0), black_box(230.0), black_box(&candidates)));
    });
}

fn benchmark_steering(c: &mut Criterion) {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let agent = Agent::new(Kind::Rock, 250.0, 230.0, 15.0, 2.0);
    let prey: Vec<Agent> = (0..100)
        .map(|i| Agent::new(Kind::Scissors, (i * 5) as f32, (i * 3) as f32, 15.0, 2.0))
        .collect();
    let hunters: Vec<Agent> = (0..100)
        .map(|i| Agent::new(Kind::Paper, (i * 3) as f32, (i * 5) as f32, 15.0, 2.0))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("steer_100v100", |b| {
        b.iter(|| steering::steer(black_box(&agent), &prey, &hunters, &mut rng));
    });
}

criterion_group!(benches, benchmark_world_tick, benchmark_nearest, benchmark_steering);
criterion_main!(benches);
