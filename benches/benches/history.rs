// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::num::NonZeroUsize;

use collage_document::{Action, Document, ImageId, ImageObject, ImageSource, reduce};
use collage_history::History;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

fn document(images: u64) -> Document {
    let mut doc = Document::new();
    for i in 0..images {
        let source = ImageSource::new(format!("blob:{i}"), Size::new(640.0, 480.0));
        let offset = i as f64 * 10.0;
        doc.apply(&Action::AddImage(ImageObject::new(
            ImageId(i + 1),
            source,
            Point::new(offset, offset),
            Size::new(320.0, 240.0),
        )));
    }
    doc
}

fn bench_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("history/commit");
    for images in [1u64, 16, 128] {
        let doc = document(images);
        group.bench_with_input(BenchmarkId::from_parameter(images), &doc, |b, doc| {
            b.iter_batched(
                || History::with_limit(doc.clone(), NonZeroUsize::MIN.saturating_add(99)),
                |mut history| {
                    for step in 0..200 {
                        let next = reduce(
                            history.current(),
                            &Action::SendToBack(ImageId(1 + step % images)),
                        );
                        if let Some(next) = next {
                            history.commit(next);
                        }
                    }
                    black_box(history);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_undo_redo(c: &mut Criterion) {
    let mut group = c.benchmark_group("history/undo_redo");
    let doc = document(32);
    let mut history = History::new(doc.clone());
    for step in 0..100 {
        let mut next = history.current().clone();
        next.apply(&Action::BringToFront(ImageId(1 + step % 32)));
        history.commit(next);
    }
    group.bench_function("walk_100", |b| {
        b.iter(|| {
            while history.undo().is_some() {}
            while let Some(doc) = history.redo() {
                black_box(doc);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_commit, bench_undo_redo);
criterion_main!(benches);
