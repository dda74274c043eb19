// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_editor::Editor;
use collage_geometry::RotatedBox;
use collage_geometry::guide::{DEFAULT_SNAP_THRESHOLD, LineGuideStops, SnapEdges, find_guides};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};

const CANVAS: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);

fn scattered_rects(n: usize) -> Vec<Rect> {
    (0..n)
        .map(|i| {
            let x = (i * 37 % 1800) as f64;
            let y = (i * 53 % 1000) as f64;
            let w = 20.0 + (i % 7) as f64 * 15.0;
            let h = 20.0 + (i % 5) as f64 * 12.0;
            RotatedBox::new(Point::new(x, y), Size::new(w, h), (i % 4) as f64 * 15.0)
                .client_rect()
        })
        .collect()
}

fn bench_find_guides(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapping/find_guides");
    let moving = RotatedBox::new(Point::new(903.0, 498.0), Size::new(240.0, 160.0), 10.0);
    let edges = SnapEdges::new(moving.client_rect(), moving.origin);

    for n in [0usize, 16, 128, 1_024] {
        let stops = LineGuideStops::from_canvas_and_rects(CANVAS, scattered_rects(n));
        group.throughput(Throughput::Elements(n as u64 + 1));
        group.bench_with_input(BenchmarkId::from_parameter(n), &stops, |b, stops| {
            b.iter(|| black_box(find_guides(stops, &edges, DEFAULT_SNAP_THRESHOLD)));
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapping/editor_drag");
    for n in [4usize, 64] {
        let mut editor = Editor::default();
        let mut ids = Vec::new();
        for i in 0..n {
            let natural = Size::new(200.0 + i as f64, 150.0);
            if let Some(id) = editor.add_image(format!("blob:{i}"), natural) {
                ids.push(id);
            }
        }
        let Some(&first) = ids.first() else {
            continue;
        };
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                editor.begin_drag(first, Point::new(500.0, 400.0));
                for step in 0..32 {
                    let t = f64::from(step);
                    black_box(editor.drag_to(Point::new(500.0 - t * 7.0, 400.0 - t * 3.0)));
                }
                editor.cancel_drag();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_guides, bench_drag);
criterion_main!(benches);
