use boolean_dnf::{compile, Compiler};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Deserialize;

const AN_EXPRESSION: &str =
    "(Java OR (spring AND hibernate)) AND (Bangalore OR chennai) OR mumbai AND calcutta";

const QUERIES_FILE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benches/data/queries.json"
));

#[derive(Deserialize)]
struct QueriesContent {
    queries: Vec<Query>,
}

#[derive(Deserialize)]
struct Query {
    name: String,
    expression: String,
}

pub fn compile_expression(c: &mut Criterion) {
    c.bench_function("compile", |b| {
        b.iter(|| {
            let _ = std::hint::black_box(compile(std::hint::black_box(AN_EXPRESSION)));
        })
    });
}

pub fn compile_with_files(c: &mut Criterion) {
    let content: QueriesContent = serde_json::from_str(QUERIES_FILE).unwrap();
    let compiler = Compiler::new();
    let mut group = c.benchmark_group("compile_with_files");
    for Query { name, expression } in &content.queries {
        group.bench_with_input(BenchmarkId::from_parameter(name), expression, |b, expression| {
            b.iter(|| {
                let _ = std::hint::black_box(compiler.compile(expression));
            })
        });
    }
    group.finish();
}

pub fn compile_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_nested");
    for levels in [1usize, 8, 32, 64] {
        let expression = (0..levels).fold("x".to_string(), |inner, level| {
            format!("(t{level} OR {inner})")
        });
        group.bench_with_input(BenchmarkId::from_parameter(levels), &expression, |b, expression| {
            b.iter(|| {
                let _ = std::hint::black_box(compile(expression));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, compile_expression, compile_with_files, compile_nested);
criterion_main!(benches);
