// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel_compositor --heading-base-level=0

//! Carousel Compositor: decide what to draw for a horizontal strip of images.
//!
//! The strip is a row of slots, each exactly one viewport wide and tall, laid
//! out left to right in content space. Given a scroll offset, the compositor
//! works out which slots overlap the viewport and letterboxes each visible
//! image into its slot.
//!
//! # Position in the stack
//!
//! - **Input and scroll state** live in `carousel_scroll`; this crate only
//!   consumes the resulting offset.
//! - **Geometry** ([`fit`], [`slot_is_visible`], [`visible_slots`]) is pure
//!   arithmetic on `kurbo` sizes.
//! - **Drawing** goes through the two-method [`Surface`] trait, so any
//!   canvas-like backend can consume the output. [`RecordingSurface`] logs
//!   commands for tests; [`RgbaSurface`] (feature `raster`) rasterizes on the
//!   CPU.
//!
//! # Frame contract
//!
//! [`composite`] always issues exactly one full-viewport clear before any
//! draw, so pixels from a previous frame never survive. Visible images are
//! then drawn in index order. Viewport dimensions must be positive; anything
//! else is a programming error and panics.
//!
//! ```rust
//! use carousel_compositor::{IntrinsicSize, RecordingSurface, composite};
//! use kurbo::Size;
//!
//! #[derive(Clone)]
//! struct Photo { width: f64, height: f64 }
//!
//! impl IntrinsicSize for Photo {
//!     fn intrinsic_size(&self) -> Size {
//!         Size::new(self.width, self.height)
//!     }
//! }
//!
//! let photos = vec![Photo { width: 400.0, height: 800.0 }];
//! let mut surface = RecordingSurface::new();
//! let placed = composite(&mut surface, &photos, 0.0, Size::new(600.0, 400.0));
//!
//! assert_eq!(placed[0].x, 200.0);
//! assert_eq!(placed[0].width, 200.0);
//! ```
//!
//! This crate is `no_std` unless the `raster` feature is enabled.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod composite;
mod fit;
#[cfg(feature = "raster")]
mod raster;
mod recording;
mod surface;

pub use composite::{Placement, composite, slot_is_visible, visible_slots};
pub use fit::{Fit, fit};
#[cfg(feature = "raster")]
pub use raster::RgbaSurface;
pub use recording::{Command, RecordingSurface};
pub use surface::{IntrinsicSize, Surface};
