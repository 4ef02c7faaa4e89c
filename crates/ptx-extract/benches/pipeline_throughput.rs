use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ptx_core::TargetSpecies;
use ptx_engine::{SyntheticConfig, SyntheticSource};
use ptx_extract::extract_transverse_momenta;

fn pipeline_bench(c: &mut Criterion) {
    c.bench_function("extract_2k_synthetic_events", |b| {
        b.iter(|| {
            let config = SyntheticConfig {
                events: 2_000,
                ..SyntheticConfig::default()
            };
            let source = SyntheticSource::new(config, 42);
            let mut buffer = vec![0.0f64; 32_768];
            let outcome =
                extract_transverse_momenta(source, TargetSpecies::from_magnitude(15), &mut buffer);
            black_box(outcome);
        });
    });
}

criterion_group!(benches, pipeline_bench);
criterion_main!(benches);
