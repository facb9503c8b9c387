#![allow(missing_docs)]

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use evodrive::simulation::ecosystem::Ecosystem;
use evodrive::simulation::params::Params;

fn bench_ecosystem_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecosystem_step");
    group.measurement_time(Duration::from_secs(10));

    for population_size in [50, 500] {
        let params = Params {
            population_size,
            ..Params::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(population_size),
            &params,
            |b, params| {
                let mut ecosystem = Ecosystem::new(params).expect("benchmark params are valid");
                b.iter(|| black_box(ecosystem.step(params)));
            },
        );
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let params = Params {
        population_size: 100,
        ..Params::default()
    };

    c.bench_function("run_generation", |b| {
        b.iter_batched(
            || Ecosystem::new(&params).expect("benchmark params are valid"),
            |mut ecosystem| black_box(ecosystem.run_generation(&params, 10_000)),
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_ecosystem_step, bench_generation);
criterion_main!(benches);
