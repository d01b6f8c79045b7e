// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard_canvas::{CanvasController, HitTarget, PointerEvent, PointerId, WheelEvent};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};

const MOUSE: PointerId = PointerId(1);

fn mounted() -> CanvasController {
    let mut canvas = CanvasController::default();
    canvas.mount(Rect::new(0.0, 0.0, 1920.0, 1080.0));
    canvas
}

/// Pointer path sweeping across the viewport.
fn path(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            Point::new(200.0 + (t * 3.0) % 1500.0, 150.0 + (t * 1.7) % 800.0)
        })
        .collect()
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas/pointer_move");

    for len in [64usize, 1_024] {
        let moves = path(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("pan", len), &moves, |b, moves| {
            let mut canvas = mounted();
            canvas.pointer_down(
                PointerEvent::primary(MOUSE, Point::new(200.0, 150.0)),
                HitTarget::Background,
                &mut (),
            );
            let mut store = |_: usize, _: Point| {};
            b.iter(|| {
                for &client in moves {
                    black_box(canvas.pointer_move(PointerEvent::primary(MOUSE, client), &mut store));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("drag", len), &moves, |b, moves| {
            let mut canvas = mounted();
            let mut notes = vec![Point::new(180.0, 120.0); 64];
            canvas.pointer_down(
                PointerEvent::primary(MOUSE, Point::new(200.0, 150.0)),
                HitTarget::Note {
                    index: 17,
                    position: Some(notes[17]),
                },
                &mut (),
            );
            b.iter(|| {
                for &client in moves {
                    black_box(canvas.pointer_move(PointerEvent::primary(MOUSE, client), &mut notes));
                }
            });
        });
    }

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas/wheel");

    let cursors = path(256);
    group.throughput(Throughput::Elements(cursors.len() as u64));
    group.bench_function("alternating", |b| {
        let mut canvas = mounted();
        b.iter(|| {
            for (i, &client) in cursors.iter().enumerate() {
                let delta_y = if i % 3 == 0 { 100.0 } else { -100.0 };
                black_box(canvas.wheel(WheelEvent { client, delta_y }));
            }
            canvas.reset_view();
        });
    });

    group.bench_function("render", |b| {
        let mut canvas = mounted();
        canvas.wheel(WheelEvent {
            client: Point::new(333.0, 444.0),
            delta_y: -1.0,
        });
        b.iter(|| black_box(canvas.render()));
    });

    group.finish();
}

criterion_group!(benches, bench_moves, bench_zoom);
criterion_main!(benches);
