use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve::{combine, quadruple_scalar_mul_vartime, split_scalar, Group, ScalarBits};
use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

fn random_scalar(rng: &mut StdRng) -> Scalar {
    let mut wide = [0u8; 64];
    rng.fill_bytes(&mut wide);
    Scalar::from_bytes_mod_order_wide(&wide)
}

fn random_point(rng: &mut StdRng) -> EdwardsPoint {
    EdwardsPoint::generator() * random_scalar(rng)
}

fn random_half_scalar(rng: &mut StdRng) -> [u64; 4] {
    [rng.random(), rng.random::<u64>() >> 1, 0, 0]
}

fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [4usize, 16, 64, 256] {
        let entries: Vec<([u64; 4], EdwardsPoint)> = (0..size)
            .map(|_| (random_half_scalar(&mut rng), random_point(&mut rng)))
            .collect();

        group.bench_with_input(BenchmarkId::new("heap", size), &entries, |bencher, entries| {
            bencher.iter(|| black_box(combine(black_box(entries.clone()))))
        });

        let (scalars, points): (Vec<_>, Vec<_>) = entries.iter().cloned().unzip();
        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bencher, _| {
            bencher.iter(|| black_box(EdwardsPoint::multi_scalar_mul(black_box(&points), black_box(&scalars))))
        });
    }

    group.finish();
}

fn bench_quadruple(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p1 = random_point(&mut rng);
    let p2 = random_point(&mut rng);
    let s1 = random_half_scalar(&mut rng);
    let s2 = random_half_scalar(&mut rng);
    let (s3, s4) = split_scalar(&random_scalar(&mut rng).to_u64_limbs());

    c.bench_function("quadruple_scalar_mul_vartime", |bencher| {
        bencher.iter(|| {
            black_box(quadruple_scalar_mul_vartime(
                black_box(&p1),
                black_box(&s1),
                black_box(&p2),
                black_box(&s2),
                black_box(&s3),
                black_box(&s4),
            ))
        })
    });
}

criterion_group!(benches, bench_combine, bench_quadruple);
criterion_main!(benches);
