// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carousel_compositor::{IntrinsicSize, Surface, composite, fit};
use carousel_scroll::{DragEvent, ScrollExtent, ScrollState};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;

#[derive(Clone, Copy)]
struct Photo(Size);

impl IntrinsicSize for Photo {
    fn intrinsic_size(&self) -> Size {
        self.0
    }
}

/// Discards draws, so only slot selection and fitting are measured.
#[derive(Default)]
struct NullSurface {
    draws: usize,
}

impl Surface<Photo> for NullSurface {
    fn clear(&mut self, _width: f64, _height: f64) {}

    fn draw_image(&mut self, _image: &Photo, x: f64, _y: f64, _width: f64, _height: f64) {
        black_box(x);
        self.draws += 1;
    }
}

fn photos(count: usize) -> Vec<Photo> {
    (0..count)
        .map(|i| {
            // Alternate landscape and portrait so both fit branches run.
            if i % 2 == 0 {
                Photo(Size::new(1600.0, 900.0))
            } else {
                Photo(Size::new(900.0, 1600.0))
            }
        })
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let slot = Size::new(640.0, 400.0);
    c.bench_function("fit/landscape_and_portrait", |b| {
        b.iter(|| {
            let wide = fit(black_box(Size::new(1600.0, 900.0)), slot);
            let tall = fit(black_box(Size::new(900.0, 1600.0)), slot);
            black_box((wide, tall));
        });
    });
}

fn bench_composite(c: &mut Criterion) {
    let viewport = Size::new(640.0, 400.0);
    let mut group = c.benchmark_group("composite");

    for count in [8usize, 128, 2_048] {
        let images = photos(count);
        let max = ScrollExtent::for_slots(count, viewport.width).max_offset();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("mid_strip", count), &images, |b, images| {
            let mut surface = NullSurface::default();
            b.iter(|| {
                let placed = composite(&mut surface, images, black_box(max / 2.0 + 17.0), viewport);
                black_box(placed);
            });
        });
    }
    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let extent = ScrollExtent::for_slots(64, 640.0);
    // A back-and-forth swipe that hits both clamps.
    let events: Vec<DragEvent> = core::iter::once(DragEvent::Start(0.0))
        .chain((0..512).map(|i| DragEvent::Move(f64::from(i % 64) * -900.0 + 20_000.0)))
        .chain(core::iter::once(DragEvent::End))
        .collect();

    let mut group = c.benchmark_group("scroll");
    group.throughput(Throughput::Elements(events.len() as u64));
    group.bench_function("reduce_swipe", |b| {
        b.iter(|| {
            let state = events
                .iter()
                .fold(ScrollState::default(), |state, &event| state.reduce(&extent, event));
            black_box(state.scroll_offset());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_fit, bench_composite, bench_reduce);
criterion_main!(benches);
