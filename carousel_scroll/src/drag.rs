// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-scroll controller: turn pointer movement into a clamped scroll offset.
//!
//! ## Usage
//!
//! 1) Create a [`DragScroll`] with the content and viewport widths.
//! 2) Call [`DragScroll::on_drag_start`] when a pointer is pressed or a touch begins.
//! 3) On each move event, call [`DragScroll::on_drag_move`]; it returns `true` when the offset changed.
//! 4) End the drag with [`DragScroll::on_drag_end`] (release) or [`DragScroll::on_drag_cancel`] (pointer left).
//!
//! ## Minimal example
//!
//! ```
//! use carousel_scroll::DragScroll;
//!
//! let mut scroll = DragScroll::new(1000.0, 400.0);
//!
//! scroll.on_drag_start(200.0);
//! assert!(scroll.is_dragging());
//!
//! // Dragging left by 150 reveals content further right.
//! assert!(scroll.on_drag_move(50.0));
//! assert_eq!(scroll.scroll_offset(), 150.0);
//!
//! scroll.on_drag_end();
//! assert!(!scroll.is_dragging());
//! ```

use crate::extent::ScrollExtent;
use crate::state::{DragEvent, ScrollState};

/// Owns a [`ScrollState`] and the [`ScrollExtent`] it is clamped against.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragScroll {
    extent: ScrollExtent,
    state: ScrollState,
}

impl DragScroll {
    /// Creates an idle controller at offset zero.
    #[must_use]
    pub fn new(content_width: f64, viewport_width: f64) -> Self {
        Self::with_extent(ScrollExtent::new(content_width, viewport_width))
    }

    /// Creates an idle controller at offset zero for an existing extent.
    #[must_use]
    pub fn with_extent(extent: ScrollExtent) -> Self {
        Self {
            extent,
            state: ScrollState::default(),
        }
    }

    /// Applies a drag event. Returns `true` when the scroll offset changed.
    pub fn apply(&mut self, event: DragEvent) -> bool {
        let next = self.state.reduce(&self.extent, event);
        let moved = next.scroll_offset() != self.state.scroll_offset();
        self.state = next;
        moved
    }

    /// Begin dragging at `pointer_x`. Restarting an active drag resets the anchor.
    pub fn on_drag_start(&mut self, pointer_x: f64) {
        self.apply(DragEvent::Start(pointer_x));
    }

    /// Move the drag to `pointer_x`. Returns `true` when the offset changed.
    ///
    /// Ignored while idle.
    pub fn on_drag_move(&mut self, pointer_x: f64) -> bool {
        self.apply(DragEvent::Move(pointer_x))
    }

    /// End the drag after a release.
    pub fn on_drag_end(&mut self) {
        self.apply(DragEvent::End);
    }

    /// End the drag because it was abandoned (pointer left the surface).
    pub fn on_drag_cancel(&mut self) {
        self.apply(DragEvent::Cancel);
    }

    /// Scroll one viewport to the right, unless already showing the last slot.
    ///
    /// Returns `true` when the offset changed.
    pub fn step_next(&mut self) -> bool {
        let width = self.extent.viewport_width();
        if self.state.scroll_offset() >= self.extent.max_offset() {
            return false;
        }
        self.set_offset(self.state.scroll_offset() + width)
    }

    /// Scroll one viewport to the left, unless already at the start.
    ///
    /// Returns `true` when the offset changed.
    pub fn step_previous(&mut self) -> bool {
        if self.state.scroll_offset() <= 0.0 {
            return false;
        }
        self.set_offset(self.state.scroll_offset() - self.extent.viewport_width())
    }

    /// Replaces the extent and re-clamps the current offset into it.
    ///
    /// Returns `true` when the offset changed.
    pub fn set_extent(&mut self, extent: ScrollExtent) -> bool {
        self.extent = extent;
        self.set_offset(self.state.scroll_offset())
    }

    /// Returns the extent used for clamping.
    #[must_use]
    pub fn extent(&self) -> &ScrollExtent {
        &self.extent
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Returns `true` while a drag operation is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Committed scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.state.scroll_offset()
    }

    /// Largest valid offset for the current extent.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        self.extent.max_offset()
    }

    /// Index of the slot nearest to the current offset.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.extent.slot_index_at(self.state.scroll_offset())
    }

    fn set_offset(&mut self, offset: f64) -> bool {
        let next = self.state.with_offset(&self.extent, offset);
        let moved = next.scroll_offset() != self.state.scroll_offset();
        self.state = next;
        moved
    }
}
