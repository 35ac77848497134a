use criterion::{black_box, Criterion, criterion_group};

use based::BasedNumber;

pub fn hexadecimal_to_decimal(c: &mut Criterion) {
    let x = BasedNumber::parse(&"A4E".repeat(20), 16).unwrap();
    c.bench_function("convert 60 hexadecimal digits to decimal", |b| b.iter(|| {
        black_box(&x).convert_base(black_box(10))
    }));
}

pub fn binary_to_ternary(c: &mut Criterion) {
    let x = BasedNumber::parse(&"10".repeat(64), 2).unwrap();
    c.bench_function("convert 128 binary digits to ternary", |b| b.iter(|| {
        black_box(&x).convert_base(black_box(3))
    }));
}

criterion_group!(conversion,
    hexadecimal_to_decimal,
    binary_to_ternary,
);
