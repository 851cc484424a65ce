use criterion::{criterion_group, criterion_main, Criterion};
use karmul::karatsuba::karatsuba_mul;
use karmul::schoolbook::schoolbook_mul;
use karmul::Natural;
use rand::{Rng, SeedableRng};

fn random_natural(rng: &mut rand_chacha::ChaCha8Rng, size: usize) -> Natural {
    let mut digits = vec![0; size];
    for x in digits.iter_mut() {
        *x = rng.gen();
    }
    Natural::from_limbs(digits)
}
fn bench_schoolbook_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_natural(&mut rng, 1000);
    let b = random_natural(&mut rng, 1000);
    c.bench_function("schoolbook_mul_1k", |bench| {
        bench.iter(|| schoolbook_mul(&a, &b))
    });
}
fn bench_karatsuba_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_natural(&mut rng, 1000);
    let b = random_natural(&mut rng, 1000);
    c.bench_function("karatsuba_mul_1k", |bench| {
        bench.iter(|| karatsuba_mul(&a, &b));
    });
}
fn bench_karatsuba_mul_10k(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_natural(&mut rng, 10000);
    let b = random_natural(&mut rng, 10000);
    c.bench_function("karatsuba_mul_10k", |bench| {
        bench.iter(|| karatsuba_mul(&a, &b));
    });
}
fn bench_add_assign(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let mut a = random_natural(&mut rng, 1000);
    let b = random_natural(&mut rng, 1000);
    c.bench_function("add_assign", |bench| {
        bench.iter(|| a += &b);
    });
}
fn bench_to_decimal(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_natural(&mut rng, 100);
    c.bench_function("to_decimal_100", |bench| {
        bench.iter(|| a.to_string());
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets =
        bench_schoolbook_mul,
        bench_karatsuba_mul,
        bench_karatsuba_mul_10k,
        bench_add_assign,
        bench_to_decimal,
);
criterion_main!(benches);
