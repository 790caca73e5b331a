use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mathchamp_core::generator::{generate_question, generate_questions, RngSource, ScriptedSource};
use mathchamp_core::worksheet::Worksheet;

fn bench_generate_question(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_question");

    group.bench_function("seeded", |b| {
        let mut rng = RngSource::seeded(42);
        b.iter(|| generate_question(black_box(1), &mut rng))
    });

    group.bench_function("scripted", |b| {
        let mut rng = ScriptedSource::new([1, 2, 7, 23]);
        b.iter(|| generate_question(black_box(1), &mut rng))
    });

    group.finish();
}

fn bench_generate_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_batch");

    for count in [10u32, 100, 1000] {
        group.bench_function(format!("questions={count}"), |b| {
            let mut rng = RngSource::seeded(7);
            b.iter(|| generate_questions(black_box(count), &mut rng))
        });
    }

    group.bench_function("worksheet=50", |b| {
        let mut rng = RngSource::seeded(7);
        b.iter(|| Worksheet::generate(black_box(50), &mut rng))
    });

    group.finish();
}

criterion_group!(benches, bench_generate_question, bench_generate_batch);
criterion_main!(benches);
