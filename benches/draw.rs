use catdraw::{transform, Categorical, Engine, EngineKind};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_f64");
    for kind in EngineKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            let mut engine = Engine::new(kind, 123);
            b.iter(|| black_box(engine.next_f64()))
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_lookup");
    for &k in &[4usize, 64usize, 1024usize] {
        // A deterministic, slightly-non-uniform weight pattern.
        let weights: Vec<f64> = (0..k).map(|i| ((i * 17 + 3) % 101) as f64 + 1.0).collect();
        let dist = Categorical::new(&weights).unwrap();
        let probs = dist.probabilities().to_vec();

        group.bench_with_input(BenchmarkId::new("transform", k), &k, |b, &_k| {
            let mut engine = Engine::new(EngineKind::XorShift, 7);
            b.iter(|| {
                let i = transform(engine.next_f64(), black_box(&probs)).unwrap();
                black_box(i);
            })
        });

        group.bench_with_input(BenchmarkId::new("categorical", k), &k, |b, &_k| {
            let mut engine = Engine::new(EngineKind::XorShift, 7);
            b.iter(|| black_box(dist.draw(&mut engine)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engines, bench_lookup);
criterion_main!(benches);
