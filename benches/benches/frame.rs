// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronoscope_events::{CategoryFilter, CategoryRegistry, Dataset, Event, EventId, Significance};
use chronoscope_imaging_ref::RecordingSurface;
use chronoscope_render::{Frame, Renderer};
use chronoscope_view::{Viewport, ZoomTransform};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const CATEGORIES: [&str; 4] = ["politics", "war", "science", "culture"];

fn synthetic(len: usize) -> Dataset {
    let events = (0..len)
        .map(|i| {
            let i = i as i64;
            let year = -3200 + (i * 104_729) % 5230;
            Event::new(
                year as i32,
                format!("Event {i}"),
                Significance::clamped(1 + i % 5),
                CATEGORIES[(i % 4) as usize],
            )
        })
        .collect();
    Dataset::new(events)
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/draw");
    let registry = CategoryRegistry::default();
    let renderer = Renderer::default();
    for len in [1_000usize, 10_000] {
        let dataset = synthetic(len);
        let filter = CategoryFilter::new(CATEGORIES).unwrap();
        group.throughput(Throughput::Elements(len as u64));
        for k in [1.0, 4.0] {
            let mut viewport = Viewport::new(1920.0, 1080.0);
            viewport.set_transform(ZoomTransform::new(k, -960.0 * (k - 1.0)));
            let frame = Frame {
                dataset: &dataset,
                registry: &registry,
                filter: &filter,
                viewport: &viewport,
                hovered: Some(EventId(0)),
                selected: None,
            };
            let mut surface = RecordingSurface::new(1920.0, 1080.0);
            group.bench_function(BenchmarkId::new(format!("k={k}"), len), |b| {
                b.iter(|| {
                    renderer.draw(&mut surface, black_box(&frame));
                    black_box(surface.last_frame().len())
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
