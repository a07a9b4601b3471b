use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use terse_core::{lexer::Lexer, parser::Parser, translate};

// ============================================================================
// Test Data: Varying Complexity and Size
// ============================================================================

const TINY_DOC: &str = "value is 42";

const SMALL_DOC: &str = r#"name is @"test"
version is 1
tags is [@"a"; @"b"; @"c"]
"#;

const MEDIUM_DOC: &str = r#"C server settings
host is @"prod.example.net"
port is 443
retries is 3

{{! pool sizes per tier,
    innermost first }}
pools is [[2; 4]; [8; 16]; [32; 64]]

banner is ?(host)
limits is [?(retries); ?(port)]

timeout = 30
endpoint = ?(host)
"#;

// Generate a large document for stress testing
fn generate_large_doc(binding_count: usize) -> String {
    let mut doc = String::from("base is 100\n");
    for i in 0..binding_count {
        doc.push_str(&format!(
            "item_{i} is [{i}; @\"entry {i}\"; ?(base)]\n"
        ));
    }
    doc
}

// ============================================================================
// Lexer Benchmarks
// ============================================================================

fn bench_lexer_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_by_size");

    for (name, source) in [
        ("tiny", TINY_DOC),
        ("small", SMALL_DOC),
        ("medium", MEDIUM_DOC),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| {
                let mut lexer = Lexer::new(black_box(src));
                lexer.lex()
            })
        });
    }

    group.finish();
}

// ============================================================================
// Parser Benchmarks
// ============================================================================

fn bench_parser_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_by_size");

    for (name, source) in [
        ("tiny", TINY_DOC),
        ("small", SMALL_DOC),
        ("medium", MEDIUM_DOC),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| {
                let mut parser = Parser::new(black_box(src));
                parser.parse_document()
            })
        });
    }

    group.finish();
}

fn bench_parser_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_binding_scaling");

    for size in [10, 100, 1000] {
        let source = generate_large_doc(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, src| {
            b.iter(|| {
                let mut parser = Parser::new(black_box(src));
                parser.parse_document()
            })
        });
    }

    group.finish();
}

// ============================================================================
// End-to-End Translation Benchmarks
// ============================================================================

fn bench_e2e_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("e2e_translation");

    for (name, source) in [
        ("tiny", TINY_DOC),
        ("small", SMALL_DOC),
        ("medium", MEDIUM_DOC),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| translate(black_box(src)))
        });
    }

    group.finish();
}

fn bench_e2e_with_yaml(c: &mut Criterion) {
    let mut group = c.benchmark_group("e2e_with_yaml_serialization");

    for (name, source) in [("small", SMALL_DOC), ("medium", MEDIUM_DOC)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| {
                let result = translate(black_box(src)).unwrap();
                result.to_yaml()
            })
        });
    }

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(lexer_benches, bench_lexer_sizes);

criterion_group!(parser_benches, bench_parser_sizes, bench_parser_scaling);

criterion_group!(e2e_benches, bench_e2e_translation, bench_e2e_with_yaml);

criterion_main!(lexer_benches, parser_benches, e2e_benches);
