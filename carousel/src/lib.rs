// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel --heading-base-level=0

//! Carousel: a draggable image carousel without a UI toolkit.
//!
//! [`Carousel`] ties the workspace crates together:
//!
//! - `carousel_scroll` holds the drag state and clamped offset;
//! - `carousel_loader` produces the images, all or nothing;
//! - `carousel_compositor` turns the offset into draw calls on a `Surface`.
//!
//! The host owns the event loop. It translates platform input into
//! [`InputEvent`]s, hands the loader's result to
//! [`Carousel::finish_loading`] once, and calls [`Carousel::frame`] whenever it
//! is ready to paint. Redraw requests are coalesced by a [`RedrawScheduler`],
//! so any number of drag moves between two paints produce a single frame at
//! the latest offset.
//!
//! ```rust
//! use carousel::{Carousel, CarouselConfig, InputEvent};
//! use carousel_compositor::RecordingSurface;
//! use image::RgbaImage;
//! use kurbo::Point;
//!
//! let mut carousel = Carousel::new(CarouselConfig::default()).unwrap();
//! carousel.finish_loading(Ok(vec![RgbaImage::new(64, 40), RgbaImage::new(64, 40)]));
//!
//! carousel.handle(InputEvent::PointerDown(Point::new(600.0, 0.0)));
//! carousel.handle(InputEvent::PointerMove(Point::new(100.0, 0.0)));
//! carousel.handle(InputEvent::PointerUp);
//!
//! let mut surface = RecordingSurface::new();
//! let placed = carousel.frame(&mut surface).unwrap();
//! assert_eq!(placed.len(), 2);
//! assert_eq!(carousel.accessibility().value_now, 1);
//! ```

mod accessibility;
mod carousel;
mod config;
mod input;
mod scheduler;

pub use accessibility::AccessibilityInfo;
pub use carousel::{Carousel, LoadState};
pub use config::{CarouselConfig, ConfigError};
pub use input::InputEvent;
pub use scheduler::{FrameTicket, RedrawScheduler};
