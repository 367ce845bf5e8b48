// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Horizontal extent of a scrollable strip and the window it is viewed through.
///
/// `ScrollExtent` owns the only clamping rule in the crate: a scroll offset is
/// always kept inside `[0, max_offset]`, where
/// `max_offset = max(0, content_width - viewport_width)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollExtent {
    content_width: f64,
    viewport_width: f64,
}

impl ScrollExtent {
    /// Creates an extent for `content_width` units of content seen through a
    /// window `viewport_width` units wide.
    ///
    /// Negative inputs are treated as zero.
    #[must_use]
    pub fn new(content_width: f64, viewport_width: f64) -> Self {
        Self {
            content_width: content_width.max(0.0),
            viewport_width: viewport_width.max(0.0),
        }
    }

    /// Extent for `count` slots, each exactly one viewport wide.
    #[must_use]
    pub fn for_slots(count: usize, viewport_width: f64) -> Self {
        Self::new(viewport_width * count as f64, viewport_width)
    }

    /// Total width of the content strip.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Width of the visible window.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Clamps `offset` into `[0, max_offset]`.
    #[must_use]
    pub fn clamp(&self, offset: f64) -> f64 {
        offset.min(self.max_offset()).max(0.0)
    }

    /// Content-space range visible at `offset`.
    #[must_use]
    pub fn visible_range(&self, offset: f64) -> Range<f64> {
        offset..offset + self.viewport_width
    }

    /// Index of the slot nearest to `offset`, assuming viewport-wide slots.
    ///
    /// Returns `0` when the viewport has no width.
    #[must_use]
    pub fn slot_index_at(&self, offset: f64) -> usize {
        if self.viewport_width <= 0.0 {
            return 0;
        }
        let index = round(offset / self.viewport_width);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Offsets are clamped and non-negative; the index is bounded by the slot count"
        )]
        {
            index.max(0.0) as usize
        }
    }
}

#[cfg(feature = "std")]
fn round(value: f64) -> f64 {
    value.round()
}

#[cfg(not(feature = "std"))]
fn round(value: f64) -> f64 {
    libm::round(value)
}

impl Default for ScrollExtent {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
