//! Scanner Benchmarks
//!
//! Run with: `cargo bench --package lexis-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lexis_lex::{scan, scan_with_options, ScanOptions};

const PROGRAM: &str = r#"
    // compute fibonacci numbers
    function fib(n) {
        if (n <= 1) {
            return n;
        }
        return fib(n - 1) + fib(n - 2);
    }

    /* main loop */
    let total = 0;
    for (var i = 0; i < 30; i = i + 1) {
        const label = "iteration";
        if (i % 2 == 0 && i != 10) {
            total = total + fib(i);
        } else {
            total = total - 1;
        }
    }
"#;

fn token_count(source: &str) -> usize {
    scan(source).map(|tokens| tokens.len()).unwrap_or(0)
}

fn bench_scanner_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let source = "let x = 42; let y = x + 1;";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| token_count(black_box("let x = 42;")))
    });

    group.bench_function("two_statements", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scanner_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_program");
    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));

    group.bench_function("default_options", |b| {
        b.iter(|| token_count(black_box(PROGRAM)))
    });

    let options = ScanOptions::default()
        .with_compound_logical_operators(true)
        .with_strict_literals(true);
    group.bench_function("all_options", |b| {
        b.iter(|| {
            scan_with_options(black_box(PROGRAM), options)
                .map(|tokens| tokens.len())
                .unwrap_or(0)
        })
    });

    group.finish();
}

fn bench_scanner_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_large");

    let source = PROGRAM.repeat(200);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_program", |b| {
        b.iter(|| token_count(black_box(&source)))
    });

    let comments = "// line comment\n/* block\ncomment */\n".repeat(1000);
    group.throughput(Throughput::Bytes(comments.len() as u64));
    group.bench_function("comments_only", |b| {
        b.iter(|| token_count(black_box(&comments)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scanner_simple,
    bench_scanner_program,
    bench_scanner_large
);
criterion_main!(benches);
