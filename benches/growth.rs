use criterion::{black_box, criterion_group, criterion_main, Criterion};

use differential_growth_wasm::growth::{GrowthConfig, GrowthEngine};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("run differential growth", |b| {
        b.iter(|| {
            let mut engine = GrowthEngine::new(GrowthConfig {
                center_x: black_box(100.0),
                center_y: black_box(100.0),
                n_starting_points: black_box(10),
                radius: black_box(200.0),
                max_force: black_box(1.5),
                max_speed: black_box(1.0),
                desired_separation: black_box(9.0),
                separation_cohesion_ratio: black_box(0.9),
                max_edge_length: black_box(5.0),
            })
            .expect("valid configuration");

            for _ in 0..200 {
                engine.step();
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
