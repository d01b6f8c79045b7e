// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard_layout::{GridLayout, Level};
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;

/// Every `gap_every`-th note lacks a position.
fn notes(len: usize, gap_every: usize) -> Vec<(Level, Option<Point>)> {
    (0..len)
        .map(|i| {
            let position = (i % gap_every != 0).then(|| Point::new(i as f64, 0.0));
            (Level::fallback(i), position)
        })
        .collect()
}

fn bench_default_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/assign_default_positions");
    let layout = GridLayout::default();

    // Fresh boards place everything; resends mostly skip placed notes but still
    // walk every row counter.
    for len in [32usize, 512, 4_096] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("fresh", len), &len, |b, &len| {
            b.iter_batched(
                || notes(len, 1),
                |mut notes| {
                    black_box(layout.assign_default_positions(&mut notes));
                    black_box(notes);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("resend", len), &len, |b, &len| {
            b.iter_batched(
                || notes(len, 10),
                |mut notes| {
                    black_box(layout.assign_default_positions(&mut notes));
                    black_box(notes);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_level_parse(c: &mut Criterion) {
    let labels = [
        "Beginner",
        "an intermediate exercise",
        "ADVANCED",
        "stretch goal",
    ];
    c.bench_function("layout/level_from_difficulty", |b| {
        b.iter(|| {
            for (i, label) in labels.iter().enumerate() {
                black_box(Level::from_difficulty(black_box(label), i));
            }
        });
    });
}

criterion_group!(benches, bench_default_positions, bench_level_parse);
criterion_main!(benches);
