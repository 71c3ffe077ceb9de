// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use folio_menu::{Column, MenuData, MenuItem};
use folio_nav::{NavState, build_path, encode};

const NAMES: &[&str] = &[
    "Photo One",
    "On Maps & Territory",
    "Hello,   World!",
    "tabs\tand\nnewlines",
    "Ünïcödé Ñames",
    "a - b -- c",
];

fn menu(columns: usize, items: usize) -> MenuData {
    MenuData {
        columns: (0..columns)
            .map(|c| Column {
                id: format!("cat{c}"),
                title: format!("Category {c}"),
                items: (0..items)
                    .map(|i| MenuItem::text(format!("Item number {i} of column {c}")))
                    .collect(),
            })
            .collect(),
    }
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Elements(NAMES.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(encode(black_box(name)));
            }
        });
    });
    let fragments: Vec<String> = NAMES
        .iter()
        .map(|n| format!("#{}", build_path("media", n)))
        .collect();
    group.bench_function("parse_fragment", |b| {
        b.iter(|| {
            for f in &fragments {
                let _ = black_box(NavState::from_fragment(black_box(f)));
            }
        });
    });
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for &(columns, items) in &[(4_usize, 16_usize), (16, 64), (32, 256)] {
        let data = menu(columns, items);
        let last = format!("cat{}", columns - 1);
        let slug = encode(&format!("Item number {} of column {}", items - 1, columns - 1));
        group.bench_function(format!("worst_case_{columns}x{items}"), |b| {
            b.iter(|| black_box(data.find(black_box(&last), black_box(&slug))));
        });
        group.bench_function(format!("miss_{columns}x{items}"), |b| {
            b.iter(|| black_box(data.find(black_box(&last), black_box("no-such-item"))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_codec, bench_lookup);
criterion_main!(benches);
