// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `carousel` crate.
//!
//! These drive a carousel of real decoded images through its lifecycle and
//! inspect the pixels it paints.

use carousel::{Carousel, CarouselConfig, InputEvent, LoadState};
use carousel_compositor::RecordingSurface;
use carousel_loader::{FetchError, LoadError, LoadedImage};
use image::{Rgba, RgbaImage};
use kurbo::Point;
use peniko::Color;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn solid(url: &str, width: u32, height: u32, color: Rgba<u8>) -> LoadedImage {
    LoadedImage::new(url, RgbaImage::from_pixel(width, height, color))
}

fn config() -> CarouselConfig {
    CarouselConfig::default()
        .with_size(60.0, 40.0)
        .with_label("Holiday photos")
}

fn rejected(url: &str) -> LoadError {
    LoadError::Fetch {
        url: url.to_owned(),
        source: FetchError::Transport("connection reset".to_owned()),
    }
}

#[test]
fn only_first_completion_counts() {
    let mut carousel = Carousel::new(config()).unwrap();

    assert!(carousel.finish_loading(Ok(vec![solid("a", 6, 4, RED)])));
    assert!(!carousel.finish_loading(Err(rejected("late"))));

    assert_eq!(carousel.load_state().images().len(), 1);
    assert!(carousel.load_state().error().is_none());
}

#[test]
fn failure_enters_failed_state_and_keeps_clearing() {
    let mut carousel = Carousel::<LoadedImage>::new(config()).unwrap();
    assert!(carousel.finish_loading(Err(rejected("b.png"))));
    assert!(!carousel.finish_loading(Ok(vec![solid("late", 6, 4, RED)])));

    match carousel.load_state() {
        LoadState::Failed(err) => assert_eq!(err.url(), "b.png"),
        other => panic!("expected Failed, got {other:?}"),
    }

    let mut surface = RecordingSurface::new();
    let placed = carousel.frame(&mut surface).unwrap();
    assert!(placed.is_empty());
    assert_eq!(surface.clear_count(), 1);
    assert_eq!(surface.draw_count(), 0);
}

#[test]
fn drag_paints_both_neighbours_with_letterbox() {
    let background = Color::from_rgba8(1, 2, 3, 255);
    let mut carousel = Carousel::new(config().with_background(background)).unwrap();
    // 120 x 40 into a 60 x 40 slot: 60 x 20 with 10px bars above and below.
    carousel.finish_loading(Ok(vec![
        solid("red", 120, 40, RED),
        solid("blue", 120, 40, BLUE),
    ]));

    carousel.handle(InputEvent::PointerDown(Point::new(50.0, 20.0)));
    carousel.handle(InputEvent::PointerMove(Point::new(20.0, 20.0)));
    carousel.handle(InputEvent::PointerUp);
    assert_eq!(carousel.scroll_offset(), 30.0);

    let mut surface = carousel.config().raster_surface();
    let placed = carousel.frame(&mut surface).unwrap();

    assert_eq!(placed.iter().map(|p| p.index).collect::<Vec<_>>(), [0, 1]);
    let pixels = surface.pixels();
    assert_eq!(*pixels.get_pixel(10, 20), RED);
    assert_eq!(*pixels.get_pixel(50, 20), BLUE);
    assert_eq!(*pixels.get_pixel(10, 2), Rgba([1, 2, 3, 255]));
    assert_eq!(*pixels.get_pixel(50, 37), Rgba([1, 2, 3, 255]));
}

#[test]
fn touch_without_points_is_ignored() {
    let mut carousel = Carousel::new(config()).unwrap();
    carousel.finish_loading(Ok(vec![solid("a", 6, 4, RED), solid("b", 6, 4, BLUE)]));
    carousel.redraw_mut().cancel();

    assert!(!carousel.handle(InputEvent::TouchStart(&[])));
    assert!(!carousel.scroll().is_dragging());

    let start = [Point::new(55.0, 5.0)];
    let moved = [Point::new(0.0, 5.0), Point::new(59.0, 5.0)];
    carousel.handle(InputEvent::TouchStart(&start));
    assert!(carousel.handle(InputEvent::TouchMove(&moved)));
    carousel.handle(InputEvent::TouchEnd);

    assert_eq!(carousel.scroll_offset(), 55.0);
    assert!(carousel.redraw().is_pending());
}

#[test]
fn accessibility_tracks_nearest_slot() {
    let mut carousel = Carousel::new(config()).unwrap();
    let info = carousel.accessibility();
    assert_eq!(info.role, "img");
    assert_eq!(info.label, "Holiday photos");
    assert_eq!((info.value_min, info.value_max, info.value_now), (0, 0, 0));

    carousel.finish_loading(Ok(vec![
        solid("a", 6, 4, RED),
        solid("b", 6, 4, RED),
        solid("c", 6, 4, RED),
    ]));
    carousel.handle(InputEvent::PointerDown(Point::new(40.0, 0.0)));
    carousel.handle(InputEvent::PointerMove(Point::new(0.0, 0.0)));

    let info = carousel.accessibility();
    assert_eq!(info.value_max, 2);
    assert_eq!(info.value_now, 1);
}

#[test]
fn invalid_geometry_is_rejected_up_front() {
    let err = Carousel::<LoadedImage>::new(config().with_size(0.0, 40.0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "viewport must have positive dimensions, got 0 x 40"
    );
}
