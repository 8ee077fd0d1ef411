//! Benchmarks for gf2m binary field operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gf2m::{
    Field, FieldElement, Polynomial, PRIME_POLYNOMIAL_DEGREE_12, PRIME_POLYNOMIAL_DEGREE_16,
    PRIME_POLYNOMIAL_DEGREE_20, PRIME_POLYNOMIAL_DEGREE_24, PRIME_POLYNOMIAL_DEGREE_32,
    PRIME_POLYNOMIAL_DEGREE_8,
};

fn bench_polynomial_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polynomial Operations");

    let a = Polynomial::new(0b111_0000_0000_1110_0000_1001_0111_0110);
    let b = Polynomial::new(0b101_1010_0011_0000_1111_0101_1100_0011);
    let modulus = PRIME_POLYNOMIAL_DEGREE_32;

    group.bench_function("mul", |bencher| {
        bencher.iter(|| black_box(a).try_mul(black_box(b)))
    });

    let product = a.try_mul(b).unwrap();
    group.bench_function("div_rem", |bencher| {
        bencher.iter(|| black_box(product).div_rem(black_box(modulus)))
    });

    group.bench_function("pow_mod_32", |bencher| {
        bencher.iter(|| black_box(a).pow_mod(black_box(0x7fff_ffff), black_box(modulus)))
    });

    group.bench_function("inverse_mod_32", |bencher| {
        bencher.iter(|| black_box(a).inverse_mod(black_box(modulus)))
    });

    group.finish();
}

fn bench_field_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Field Generate");

    let f8 = Field::<u8>::new(PRIME_POLYNOMIAL_DEGREE_8).unwrap();
    group.bench_with_input(BenchmarkId::new("generate", 8), &f8, |bencher, f| {
        bencher.iter(|| f.generate(black_box(0b111_1111)))
    });

    let f12 = Field::<u16>::new(PRIME_POLYNOMIAL_DEGREE_12).unwrap();
    group.bench_with_input(BenchmarkId::new("generate", 12), &f12, |bencher, f| {
        bencher.iter(|| f.generate(black_box(0b111_1111_1111)))
    });

    let f16 = Field::<u16>::new(PRIME_POLYNOMIAL_DEGREE_16).unwrap();
    group.bench_with_input(BenchmarkId::new("generate", 16), &f16, |bencher, f| {
        bencher.iter(|| f.generate(black_box(0b111_1111_1111_1111)))
    });

    let f20 = Field::<u32>::new(PRIME_POLYNOMIAL_DEGREE_20).unwrap();
    group.bench_with_input(BenchmarkId::new("generate", 20), &f20, |bencher, f| {
        bencher.iter(|| f.generate(black_box(0b111_1111_1111_1111_1111)))
    });

    let f32 = Field::<u32>::new(PRIME_POLYNOMIAL_DEGREE_32).unwrap();
    group.bench_with_input(BenchmarkId::new("generate", 32), &f32, |bencher, f| {
        bencher.iter(|| f.generate(black_box(0x7fff_ffff)))
    });

    group.finish();
}

fn bench_field_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Field Operations");

    let f8 = Field::<u8>::new(PRIME_POLYNOMIAL_DEGREE_8).unwrap();
    group.bench_function("mul_8", |bencher| {
        bencher.iter(|| f8.mul(black_box(&[0xBC, 0xDE])))
    });
    group.bench_function("inverse_8", |bencher| {
        bencher.iter(|| f8.inverse(black_box(0b1010_1010)))
    });

    let f16 = Field::<u16>::new(PRIME_POLYNOMIAL_DEGREE_16).unwrap();
    group.bench_function("inverse_16", |bencher| {
        bencher.iter(|| f16.inverse(black_box(0b1010_1010_1010_1010)))
    });

    let f24 = Field::<u32>::new(PRIME_POLYNOMIAL_DEGREE_24).unwrap();
    group.bench_function("inverse_24", |bencher| {
        bencher.iter(|| f24.inverse(black_box(0b1010_1010_1010_1010_1010_1010)))
    });

    let f32 = Field::<u32>::new(PRIME_POLYNOMIAL_DEGREE_32).unwrap();
    group.bench_function("inverse_32", |bencher| {
        bencher.iter(|| f32.inverse(black_box(0b1010_1010_1010_1010_1010_1010_1010_1010)))
    });
    group.bench_function("pow_32", |bencher| {
        bencher.iter(|| {
            f32.pow(
                black_box(0b1010_1010_1010_1010_1010_1010_1010_1010),
                black_box(f32.order() - 2),
            )
        })
    });

    group.finish();
}

fn bench_field_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("FieldElement Operations");

    let modulus = PRIME_POLYNOMIAL_DEGREE_16;
    let a = FieldElement::new(Polynomial::new(0x1234), modulus).unwrap();
    let b = FieldElement::new(Polynomial::new(0x5678), modulus).unwrap();

    group.bench_function("mul", |bencher| {
        bencher.iter(|| black_box(a).try_mul(black_box(&b)))
    });

    group.bench_function("div", |bencher| {
        bencher.iter(|| black_box(a).try_div(black_box(&b)))
    });

    group.bench_function("pow", |bencher| {
        bencher.iter(|| black_box(a).pow(black_box(65_000)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_polynomial_operations,
    bench_field_generate,
    bench_field_operations,
    bench_field_element,
);
criterion_main!(benches);
