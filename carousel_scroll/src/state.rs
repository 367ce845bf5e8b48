// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll state value and the pure reducer that advances it.
//!
//! Every input is expressed as a [`DragEvent`] and applied with
//! [`ScrollState::reduce`], which returns the next state without touching the
//! previous one. [`DragScroll`](crate::DragScroll) is a thin owner around this
//! value; hosts that prefer to keep state themselves can call the reducer
//! directly.
//!
//! ```
//! use carousel_scroll::{DragEvent, ScrollExtent, ScrollState};
//!
//! let extent = ScrollExtent::new(1000.0, 400.0);
//! let state = ScrollState::default()
//!     .reduce(&extent, DragEvent::Start(200.0))
//!     .reduce(&extent, DragEvent::Move(50.0));
//! assert_eq!(state.scroll_offset(), 150.0);
//! assert_eq!(state.drag_anchor_x(), 50.0);
//! ```

use crate::extent::ScrollExtent;

/// Interaction phase of a drag-scroll surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No pointer is held; move events are ignored.
    #[default]
    Idle,
    /// A pointer or touch is held and moves scroll the content.
    Dragging,
}

/// A single drag input, already reduced to a horizontal coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// Pointer pressed or touch started at the given x coordinate.
    Start(f64),
    /// Pointer or primary touch moved to the given x coordinate.
    Move(f64),
    /// Pointer released or touch ended.
    End,
    /// Drag abandoned, for example because the pointer left the surface.
    ///
    /// Handled identically to [`DragEvent::End`].
    Cancel,
}

/// Drag state plus the committed scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    phase: DragPhase,
    drag_anchor_x: f64,
    scroll_offset: f64,
}

impl ScrollState {
    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Pointer coordinate that subsequent move deltas are measured against.
    #[must_use]
    pub fn drag_anchor_x(&self) -> f64 {
        self.drag_anchor_x
    }

    /// Committed scroll offset in content space.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Applies `event` and returns the resulting state.
    #[must_use]
    pub fn reduce(self, extent: &ScrollExtent, event: DragEvent) -> Self {
        match event {
            DragEvent::Start(x) => Self {
                phase: DragPhase::Dragging,
                drag_anchor_x: x,
                ..self
            },
            DragEvent::Move(x) => self.drag_to(extent, x),
            DragEvent::End | DragEvent::Cancel => Self {
                phase: DragPhase::Idle,
                ..self
            },
        }
    }

    /// Returns the state with the offset moved to `offset`, clamped.
    ///
    /// The drag phase and anchor are preserved.
    #[must_use]
    pub fn with_offset(self, extent: &ScrollExtent, offset: f64) -> Self {
        Self {
            scroll_offset: extent.clamp(offset),
            ..self
        }
    }

    fn drag_to(self, extent: &ScrollExtent, x: f64) -> Self {
        if self.phase != DragPhase::Dragging {
            return self;
        }
        let delta = x - self.drag_anchor_x;
        let clamped = extent.clamp(self.scroll_offset - delta);
        // Pinned at a boundary: keep the anchor so pushing further does nothing.
        if clamped == self.scroll_offset {
            return self;
        }
        Self {
            scroll_offset: clamped,
            drag_anchor_x: x,
            ..self
        }
    }
}
