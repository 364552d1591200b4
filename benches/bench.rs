use criterion::{Criterion, criterion_group, criterion_main};
use gasm::*;
use std::fs;
use std::hint::black_box;

fn lexer(c: &mut Criterion) {
    let contents = fs::read_to_string("./tests/fixtures/counter.asm").unwrap();
    let large = contents.repeat(1000);

    c.bench_function("classify", |b| {
        b.iter(|| lexer::classify_str(black_box(&contents)))
    });
    c.bench_function("classify large", |b| {
        b.iter(|| lexer::classify_str(black_box(&large)))
    });
}

fn rules(c: &mut Criterion) {
    let rules = lexer::Rules::compile().unwrap();
    c.bench_function("compile", |b| b.iter(lexer::Rules::compile));
    c.bench_function("classify line", |b| {
        b.iter(|| rules.classify_line(1, black_box("        LDX #$0A        ; load counter")))
    });
}

criterion_group!(benches, lexer, rules);
criterion_main!(benches);
