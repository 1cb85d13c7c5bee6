// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use objtool::config::{AxisTargets, CenterAxes};
use objtool::geometry::{apply, triangulate};
use objtool::{analyze, parse_obj_str, ObjModel, TransformConfig};
use std::fmt::Write;

/// Flat grid of `n * n` quads with normals and texture coordinates
fn grid_source(n: usize) -> String {
    let mut source = String::new();
    for i in 0..=n {
        for j in 0..=n {
            let _ = writeln!(source, "v {} {} {}", i as f64, (i * j) as f64 * 0.01, j as f64);
            let _ = writeln!(source, "vt {} {}", i as f64 / n as f64, j as f64 / n as f64);
        }
    }
    source.push_str("vn 0 1 0\n");
    for i in 0..n {
        for j in 0..n {
            let a = i * (n + 1) + j + 1;
            let b = a + n + 1;
            let _ = writeln!(
                source,
                "f {a}/{a}/1 {}/{}/1 {}/{}/1 {b}/{b}/1",
                a + 1,
                a + 1,
                b + 1,
                b + 1
            );
        }
    }
    source
}

fn grid(n: usize) -> ObjModel {
    parse_obj_str(&grid_source(n)).unwrap()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for n in [16, 64] {
        let source = grid_source(n);
        group.bench_with_input(BenchmarkId::new("grid", n), &source, |b, source| {
            b.iter(|| parse_obj_str(black_box(source)).unwrap());
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    let model = grid(64);
    group.bench_function("grid_64", |b| {
        b.iter(|| analyze(black_box(&model)));
    });

    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    let model = grid(64);

    group.bench_function("triangulate", |b| {
        b.iter(|| triangulate(black_box(&model.faces)));
    });

    let config = TransformConfig {
        triangulate: true,
        scale: 2.0,
        resize: AxisTargets {
            x: Some(10.0),
            ..Default::default()
        },
        center: CenterAxes::all(),
        ground: true,
        ..Default::default()
    };
    group.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let mut m = model.clone();
            apply(&mut m, black_box(&config));
            m
        });
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    let model = grid(64);
    group.bench_function("grid_64", |b| {
        b.iter(|| black_box(&model).to_string());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_analyze,
    bench_transform,
    bench_serialize
);
criterion_main!(benches);
