use criterion::{black_box, Criterion, criterion_group};

use based::BasedNumber;

fn repeated(glyph: &str, count: usize, base: u32) -> BasedNumber {
    BasedNumber::parse(&glyph.repeat(count), base).unwrap()
}

pub fn add_with_carries(c: &mut Criterion) {
    let x = repeated("F", 256, 16);
    let y = BasedNumber::parse("1", 16).unwrap();
    c.bench_function("add with a carry at every digit", |b| b.iter(|| {
        black_box(&x).add(black_box(&y))
    }));
}

pub fn multiply_small(c: &mut Criterion) {
    let x = repeated("9", 8, 10);
    c.bench_function("multiply two 8 digit numbers", |b| b.iter(|| {
        black_box(&x).multiply(black_box(&x))
    }));
}

pub fn multiply_large(c: &mut Criterion) {
    let x = repeated("7", 256, 8);
    c.bench_function("multiply two 256 digit numbers", |b| b.iter(|| {
        black_box(&x).multiply(black_box(&x))
    }));
}

criterion_group!(arithmetic,
    add_with_carries,
    multiply_small,
    multiply_large,
);
