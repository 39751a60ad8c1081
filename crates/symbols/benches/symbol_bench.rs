//! Symbol benchmarks
//!
//! Measures the cost of creating symbols against plain strings, and of
//! comparing symbols against comparing strings, for names of 10, 100 and
//! 1000 bytes.
//! Run with: `cargo bench --bench symbol_bench`

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use symbols::{Symbol, SymbolTable};

const SIZES: [usize; 3] = [10, 100, 1000];

/// Name of `size` bytes, all `'a'`
fn name_of(size: usize) -> Vec<u8> {
    vec![b'a'; size]
}

/// Turn a buffer built by the benches into a `String`
fn to_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Same buffer with its first byte changed
fn flipped(mut bytes: Vec<u8>) -> Vec<u8> {
    bytes[0] = b'b';
    bytes
}

/// Benchmark creating strings and symbols
fn bench_make(c: &mut Criterion) {
    let mut group = c.benchmark_group("make");
    group.throughput(Throughput::Elements(1));

    for &size in &SIZES {
        let name = name_of(size);

        // Baseline: copy the bytes into a fresh string
        group.bench_with_input(BenchmarkId::new("string", size), &name, |b, name| {
            b.iter(|| to_string(black_box(name)))
        });

        // Intern a freshly built string whose name is already in the table
        group.bench_with_input(BenchmarkId::new("same", size), &name, |b, name| {
            let _ = Symbol::intern(&to_string(name));
            b.iter_batched(
                || to_string(name),
                |s| Symbol::intern(&s),
                BatchSize::SmallInput,
            )
        });

        // Intern a different name each iteration
        group.bench_with_input(BenchmarkId::new("diff", size), &size, |b, &size| {
            let table = SymbolTable::new();
            let mut counter = 0u64;
            b.iter_batched(
                || {
                    counter += 1;
                    format!("{:0>width$x}", counter, width = size)
                },
                |s| table.intern(&s),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// Benchmark comparing symbols against comparing strings
fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    group.throughput(Throughput::Elements(1));

    for &size in &SIZES {
        let name = name_of(size);

        let x = Symbol::intern(&to_string(&name));
        let y = Symbol::intern(&to_string(&name));
        group.bench_function(BenchmarkId::new("symbol_eq", size), |b| {
            b.iter(|| black_box(x) == black_box(y))
        });

        let ne = Symbol::intern(&to_string(&flipped(name.clone())));
        group.bench_function(BenchmarkId::new("symbol_ne", size), |b| {
            b.iter(|| black_box(x) == black_box(ne))
        });

        // Same string object on both sides
        let s = to_string(&name);
        group.bench_function(BenchmarkId::new("string_id", size), |b| {
            b.iter(|| black_box(s.as_str()) == black_box(s.as_str()))
        });

        let s2 = to_string(&name);
        group.bench_function(BenchmarkId::new("string_eq", size), |b| {
            b.iter(|| black_box(s.as_str()) == black_box(s2.as_str()))
        });

        let s3 = to_string(&flipped(name.clone()));
        group.bench_function(BenchmarkId::new("string_ne", size), |b| {
            b.iter(|| black_box(s.as_str()) == black_box(s3.as_str()))
        });
    }

    group.finish();
}

/// Benchmark reading names back
fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    group.throughput(Throughput::Elements(1));

    let sym = Symbol::intern("test_string");
    group.bench_function("as_str", |b| b.iter(|| black_box(sym).as_str()));
    group.bench_function("nil_as_str", |b| {
        b.iter(|| black_box(Symbol::default()).as_str())
    });

    group.finish();
}

/// Benchmark concurrent interning into one table
fn bench_concurrent(c: &mut Criterion) {
    use std::thread;

    let mut group = c.benchmark_group("concurrent");

    for &num_threads in &[1usize, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("intern_shared_names", num_threads),
            &num_threads,
            |b, &n| {
                let table = SymbolTable::new();
                b.iter(|| {
                    thread::scope(|s| {
                        for _ in 0..n {
                            s.spawn(|| {
                                for j in 0..100 {
                                    black_box(table.intern(&format!("shared_{}", j)));
                                }
                            });
                        }
                    })
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_make,
    bench_compare,
    bench_text,
    bench_concurrent,
);

criterion_main!(benches);
