use criterion::{black_box, criterion_group, criterion_main, Criterion};

use namematch::test::*;
use namematch::*;

pub fn benchmarks(c: &mut Criterion) {
    let model = MatchModel::build(get_test_input());

    let mut builder = PairKeyBuilder::new();
    let parts = model
        .name_ids("charlie james c weymouth")
        .expect("fixture name")
        .to_vec();
    c.bench_function("pairkey_build", |b| {
        b.iter(|| {
            builder
                .build(black_box(&parts), &model.tradeouts, &model.interner)
                .len()
        })
    });

    let mut presence = PresenceBuffer::new(model.interner.len());
    let a = model
        .name_ids("charles weymouth")
        .expect("fixture name")
        .to_vec();
    let b_ids = model
        .name_ids("charlie james c weymouth")
        .expect("fixture name")
        .to_vec();
    c.bench_function("validate", |b| {
        b.iter(|| presence.validate(black_box(&a), black_box(&b_ids), &model.word_matches))
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
