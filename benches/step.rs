use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cgmath::vec2;
use drop_sim::{ParameterSet, Simulation};

fn step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [50, 250, 1000] {
        let params = ParameterSet {
            active_count: count,
            smoothing_radius: 20.0,
            ..Default::default()
        };
        let mut sim = Simulation::initialize(&params).expect("failed to initialize");

        group.bench_with_input(BenchmarkId::from_parameter(count), &params, |b, params| {
            b.iter(|| {
                sim.step(1.0 / 60.0, vec2(0.0, 1.0), params)
                    .expect("failed to step");
                std::hint::black_box(&sim);
            })
        });
    }
    group.finish();
}

fn density_grid(c: &mut Criterion) {
    let params = ParameterSet {
        active_count: 1000,
        smoothing_radius: 20.0,
        ..Default::default()
    };
    let sim = Simulation::initialize(&params).expect("failed to initialize");

    c.bench_function("density_grid/80x60", |b| {
        b.iter(|| std::hint::black_box(sim.density_grid(&params, 80, 60)))
    });
}

criterion_group!(benches, step, density_grid);
criterion_main!(benches);
