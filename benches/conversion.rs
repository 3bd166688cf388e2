use caseshift::converter::{detector, tokenizer, CaseConverter, Target};
use caseshift::{Config, Style};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize compound", |b| {
        b.iter(|| tokenizer::tokenize(black_box("someHTTPServerErrorName2")))
    });
}

fn bench_detect(c: &mut Criterion) {
    c.bench_function("detect upper snake", |b| {
        b.iter(|| detector::detect(black_box("SOME_LONG_CONSTANT_NAME")))
    });
}

fn bench_convert_batch(c: &mut Criterion) {
    let converter = CaseConverter::new(&Config::default()).unwrap();
    let inputs: Vec<String> = (0..1000)
        .map(|i| format!("someIdentifierName{}", i))
        .collect();

    c.bench_function("convert batch 1000", |b| {
        b.iter(|| converter.convert_batch(black_box(&inputs), Target::Style(Style::Snake)))
    });
}

criterion_group!(benches, bench_tokenize, bench_detect, bench_convert_batch);
criterion_main!(benches);
