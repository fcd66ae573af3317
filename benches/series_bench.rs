//! Benchmarks for power-series Newton iterations and nim arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use vellum_combinat::{int_to_perm, perm_to_int};
use vellum_integers::Mod998244353;
use vellum_rings::nim_mul;
use vellum_series::PowerSeries;

type F = Mod998244353;

/// Random series with the given constant term.
fn random_series(len: usize, c0: u64, rng: &mut ChaCha8Rng) -> PowerSeries<F> {
    let mut coeffs = vec![F::new(c0)];
    coeffs.extend((1..len).map(|_| F::new(rng.gen_range(0..998_244_353))));
    PowerSeries::from_coeffs(coeffs)
}

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for precision in [1024, 16384] {
        let unit = random_series(precision, 1, &mut rng);
        let nil = random_series(precision, 0, &mut rng);

        group.bench_with_input(BenchmarkId::new("inverse", precision), &precision, |b, _| {
            b.iter(|| black_box(unit.inverse()));
        });
        group.bench_with_input(BenchmarkId::new("log", precision), &precision, |b, _| {
            b.iter(|| black_box(unit.log()));
        });
        group.bench_with_input(BenchmarkId::new("exp", precision), &precision, |b, _| {
            b.iter(|| black_box(nil.exp()));
        });
        group.bench_with_input(BenchmarkId::new("pow", precision), &precision, |b, _| {
            b.iter(|| black_box(unit.pow(1_000_000_007)));
        });
    }

    group.finish();
}

fn bench_nim_mul(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let pairs: Vec<(u64, u64)> = (0..1024).map(|_| (rng.gen(), rng.gen())).collect();

    c.bench_function("nim_mul_1024", |b| {
        b.iter(|| {
            pairs
                .iter()
                .fold(0u64, |acc, &(x, y)| acc ^ nim_mul(black_box(x), black_box(y)))
        });
    });
}

fn bench_perm_codes(c: &mut Criterion) {
    let perm: Vec<usize> = vec![7, 3, 19, 0, 12, 5, 16, 1, 9, 14, 2, 18, 6, 11, 4, 17, 8, 13, 10, 15];
    let code = perm_to_int(&perm).unwrap_or_default();

    c.bench_function("perm_to_int_20", |b| b.iter(|| black_box(perm_to_int(black_box(&perm)))));
    c.bench_function("int_to_perm_20", |b| b.iter(|| black_box(int_to_perm(black_box(code), 20))));
}

criterion_group!(benches, bench_series, bench_nim_mul, bench_perm_codes);
criterion_main!(benches);
