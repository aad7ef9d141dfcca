//! Benchmarks for verlet2d simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use verlet2d::*;

fn bench_rope_simulation(c: &mut Criterion) {
    c.bench_function("rope_50_segments_60_frames", |b| {
        b.iter(|| {
            let vertices: Vec<Vec2<f32>> = (0..=50)
                .map(|i| Vec2::new(100.0 + i as f32 * 5.0, 50.0))
                .collect();
            let mut rope = shapes::line_segments(&vertices, 1.0);
            rope.pin(0, None).unwrap();

            let mut world: World<f32> = World::with_defaults(800.0, 600.0);
            let id = world.add_composite(rope);
            for _ in 0..60 {
                world.advance(8);
            }
            world.composites[id].positions()
        });
    });
}

fn bench_cloth_simulation(c: &mut Criterion) {
    c.bench_function("cloth_20x20_60_frames", |b| {
        b.iter(|| {
            let mut world: World<f32> = World::with_defaults(800.0, 600.0);
            let id = world.add_composite(shapes::cloth(
                Vec2::new(400.0, 150.0), 200.0, 200.0, 20, 20, 4, 1.0,
            ));
            for _ in 0..60 {
                world.advance(8);
            }
            world.composites[id].positions()
        });
    });
}

fn bench_tire_simulation(c: &mut Criterion) {
    c.bench_function("tire_30_segments_120_frames", |b| {
        b.iter(|| {
            let mut world: World<f32> = World::with_defaults(800.0, 600.0);
            let tire = shapes::tire(Vec2::new(400.0, 100.0), 60.0, 30, 0.3, 0.9).unwrap();
            let id = world.add_composite(tire);
            for _ in 0..120 {
                world.advance(8);
            }
            world.composites[id].positions()
        });
    });
}

criterion_group!(benches, bench_rope_simulation, bench_cloth_simulation, bench_tire_simulation);
criterion_main!(benches);
