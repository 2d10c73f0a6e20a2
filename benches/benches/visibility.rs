// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronoscope_events::{CategoryFilter, Dataset, Event, Significance};
use chronoscope_hit::{HitParams, hit_test, hit_test_view};
use chronoscope_layout::layout_visible;
use chronoscope_view::{Viewport, ZoomTransform};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

const CATEGORIES: [&str; 6] = ["politics", "war", "science", "culture", "religion", "economy"];

/// Deterministic synthetic dataset spread over the default domain.
fn synthetic(len: usize) -> Dataset {
    let events = (0..len)
        .map(|i| {
            let i = i as i64;
            let year = -3200 + (i * 7919) % 5230;
            Event::new(
                year as i32,
                format!("Event {i}"),
                Significance::clamped(1 + (i * 31) % 5),
                CATEGORIES[(i % 6) as usize],
            )
        })
        .collect();
    Dataset::new(events)
}

fn bench_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility/visible");
    for len in [1_000usize, 10_000, 100_000] {
        let dataset = synthetic(len);
        let filter = CategoryFilter::new(CATEGORIES).unwrap();
        group.throughput(Throughput::Elements(len as u64));
        for k in [0.5, 1.0, 8.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("k={k}"), len),
                &dataset,
                |b, dataset| {
                    b.iter(|| black_box(dataset.visible(&filter, black_box(k)).count()));
                },
            );
        }
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility/layout_visible");
    for len in [1_000usize, 10_000] {
        let dataset = synthetic(len);
        let filter = CategoryFilter::new(CATEGORIES).unwrap();
        let mut viewport = Viewport::new(1920.0, 1080.0);
        viewport.set_transform(ZoomTransform::new(2.0, -900.0));
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &dataset, |b, dataset| {
            b.iter(|| black_box(layout_visible(dataset, &filter, &viewport)));
        });
    }
    group.finish();
}

fn bench_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility/hit_test");
    for len in [1_000usize, 10_000] {
        let dataset = synthetic(len);
        let filter = CategoryFilter::new(CATEGORIES).unwrap();
        let viewport = Viewport::new(1920.0, 1080.0);
        let params = HitParams::default();
        let pt = Point::new(960.0, 540.0);

        // Hit testing against a cached layout versus laying out per query.
        let placed = layout_visible(&dataset, &filter, &viewport);
        group.bench_with_input(BenchmarkId::new("cached", len), &placed, |b, placed| {
            b.iter(|| black_box(hit_test(placed, black_box(pt), &params)));
        });
        group.bench_with_input(BenchmarkId::new("view", len), &dataset, |b, dataset| {
            b.iter(|| {
                black_box(hit_test_view(
                    dataset,
                    &filter,
                    &viewport,
                    black_box(pt),
                    &params,
                ))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_visible, bench_layout, bench_hit);
criterion_main!(benches);
