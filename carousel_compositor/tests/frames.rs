// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `carousel_compositor` crate.
//!
//! These run whole frames through `composite` against a `RecordingSurface`
//! and check the command stream: one clear first, then the visible slots in
//! index order with their letterboxed geometry.

use std::sync::Arc;

use carousel_compositor::{Command, IntrinsicSize, RecordingSurface, composite, fit};
use kurbo::Size;

#[derive(Debug, PartialEq)]
struct Photo {
    name: &'static str,
    size: Size,
}

impl IntrinsicSize for Photo {
    fn intrinsic_size(&self) -> Size {
        self.size
    }
}

fn photos(count: usize) -> Vec<Arc<Photo>> {
    const NAMES: [&str; 4] = ["a", "b", "c", "d"];
    (0..count)
        .map(|i| {
            Arc::new(Photo {
                name: NAMES[i % NAMES.len()],
                size: Size::new(800.0, 400.0),
            })
        })
        .collect()
}

const VIEW: Size = Size::new(600.0, 400.0);

#[test]
fn fit_matches_known_letterboxes() {
    let wide = fit(Size::new(800.0, 400.0), VIEW);
    assert_eq!(
        (wide.draw_width, wide.draw_height, wide.offset_x, wide.offset_y),
        (600.0, 300.0, 0.0, 50.0)
    );

    let tall = fit(Size::new(400.0, 800.0), VIEW);
    assert_eq!(
        (tall.draw_width, tall.draw_height, tall.offset_x, tall.offset_y),
        (200.0, 400.0, 200.0, 0.0)
    );
}

#[test]
fn straddling_offset_draws_two_slots() {
    let images = photos(3);
    let mut surface = RecordingSurface::new();
    let placed = composite(&mut surface, &images, 700.0, VIEW);

    let indices: Vec<_> = placed.iter().map(|p| p.index).collect();
    assert_eq!(indices, [1, 2]);
    assert_eq!(surface.draw_count(), 2);

    let drawn: Vec<_> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            Command::DrawImage { image, .. } => Some(image.name),
            Command::Clear { .. } => None,
        })
        .collect();
    assert_eq!(drawn, ["b", "c"]);
}

#[test]
fn offset_beyond_single_slot_draws_nothing() {
    let images = photos(1);
    let mut surface = RecordingSurface::new();
    let placed = composite(&mut surface, &images, 1000.0, VIEW);

    assert!(placed.is_empty());
    assert_eq!(surface.draw_count(), 0);
}

#[test]
fn every_frame_starts_with_exactly_one_full_clear() {
    let images = photos(4);
    let mut surface = RecordingSurface::new();

    for offset in [0.0, 150.0, 600.0, 1799.5, 1800.0] {
        surface.reset();
        composite(&mut surface, &images, offset, VIEW);

        let commands = surface.commands();
        assert_eq!(
            commands.first(),
            Some(&Command::Clear {
                width: 600.0,
                height: 400.0
            }),
            "frame at offset {offset} did not start with a clear"
        );
        assert_eq!(surface.clear_count(), 1);
        assert!((1..=2).contains(&surface.draw_count()));
    }
}

#[test]
fn placements_move_with_the_offset() {
    let images = photos(2);
    let mut surface = RecordingSurface::new();

    let at_rest = composite(&mut surface, &images, 0.0, VIEW);
    let scrolled = composite(&mut surface, &images, 250.0, VIEW);

    assert_eq!(at_rest[0].x - scrolled[0].x, 250.0);
    assert_eq!(scrolled[1].x, 350.0);
    assert_eq!(scrolled[1].y, 50.0);
}
