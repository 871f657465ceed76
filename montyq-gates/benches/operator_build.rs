use criterion::{black_box, criterion_group, criterion_main, Criterion};
use montyq_gates::{extended_switch_operator, reveal_operator, unitarity_deviation};
use montyq_core::DIMENSION;

fn bench_reveal_operator(c: &mut Criterion) {
    c.bench_function("reveal_operator", |b| {
        b.iter(|| black_box(reveal_operator()))
    });
}

fn bench_extended_switch_operator(c: &mut Criterion) {
    c.bench_function("extended_switch_operator", |b| {
        b.iter(|| black_box(extended_switch_operator()))
    });
}

fn bench_unitarity_check(c: &mut Criterion) {
    let reveal = reveal_operator();
    c.bench_function("unitarity_deviation_64", |b| {
        b.iter(|| black_box(unitarity_deviation(&reveal, DIMENSION)))
    });
}

criterion_group!(
    benches,
    bench_reveal_operator,
    bench_extended_switch_operator,
    bench_unitarity_check
);
criterion_main!(benches);
