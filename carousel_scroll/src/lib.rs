// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel_scroll --heading-base-level=0

//! Carousel Scroll: drag-to-scroll state for horizontal strips.
//!
//! This crate turns a stream of horizontal pointer coordinates into a scroll
//! offset that always stays inside the scrollable range of a content strip.
//! It is headless: callers reduce their own pointer and touch events to a
//! single x coordinate and feed them in.
//!
//! - [`ScrollExtent`]: content width, viewport width, and the clamping rule.
//! - [`ScrollState`] and [`DragEvent`]: an explicit state value advanced by a
//!   pure reducer, [`ScrollState::reduce`].
//! - [`DragScroll`]: a small controller owning both, with step navigation and
//!   extent updates.
//!
//! ## Offset rules
//!
//! - The offset lies in `[0, max(0, content_width - viewport_width)]` after
//!   every event.
//! - A move computes `offset - (x - anchor)` and clamps it. When the clamped
//!   value differs from the current offset it is committed and the anchor is
//!   rebased to `x`, so the content tracks the pointer without drift.
//! - When the clamped value equals the current offset (pushing past an edge),
//!   nothing changes, including the anchor.
//! - Moves while idle are ignored.
//!
//! ```rust
//! use carousel_scroll::DragScroll;
//!
//! let mut scroll = DragScroll::new(1000.0, 400.0);
//! scroll.on_drag_start(0.0);
//! scroll.on_drag_move(-5_000.0);
//! assert_eq!(scroll.scroll_offset(), 600.0);
//! scroll.on_drag_cancel();
//! ```
//!
//! This crate is `no_std`. Rounding uses `std` by default; build with
//! `default-features = false, features = ["libm"]` for targets without it.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("carousel_scroll requires either the `std` or the `libm` feature");

mod drag;
mod extent;
mod state;

pub use drag::DragScroll;
pub use extent::ScrollExtent;
pub use state::{DragEvent, DragPhase, ScrollState};
