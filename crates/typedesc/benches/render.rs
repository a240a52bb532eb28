// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Bench code readability over pedantic
#![allow(clippy::missing_panics_doc)] // Benches panic on failure

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typedesc::{dump, resolve, Reflect};

#[derive(Reflect)]
struct Node {
    key: String,
    value: i32,
    children: Vec<Node>,
}

fn tree(depth: usize, fanout: usize) -> Node {
    Node {
        key: format!("node-{}", depth),
        value: depth as i32,
        children: if depth == 0 {
            Vec::new()
        } else {
            (0..fanout).map(|_| tree(depth - 1, fanout)).collect()
        },
    }
}

// ============================================================================
// Registry Benchmarks
// ============================================================================

/// Benchmark: resolve on a warm cache
/// Target: < 100 ns
fn bench_resolve_warm(c: &mut Criterion) {
    let _ = resolve::<Node>();
    c.bench_function("resolve_warm", |b| b.iter(|| black_box(resolve::<Node>())));
}

// ============================================================================
// Render Benchmarks
// ============================================================================

fn bench_dump_primitive(c: &mut Criterion) {
    c.bench_function("dump_i64", |b| b.iter(|| dump(black_box(&42i64))));
}

fn bench_dump_tree(c: &mut Criterion) {
    let small = tree(2, 3);
    let large = tree(4, 4);
    c.bench_function("dump_tree_13_nodes", |b| b.iter(|| dump(black_box(&small))));
    c.bench_function("dump_tree_341_nodes", |b| b.iter(|| dump(black_box(&large))));
}

criterion_group!(
    benches,
    bench_resolve_warm,
    bench_dump_primitive,
    bench_dump_tree
);
criterion_main!(benches);
