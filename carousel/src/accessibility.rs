// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Static accessibility attributes for the carousel viewport.
///
/// The value range describes slot indices: `value_min` is always zero and
/// `value_max` is the last slot (zero when there are no images).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessibilityInfo<'a> {
    /// Role reported to assistive technology.
    pub role: &'static str,
    /// Human-readable label.
    pub label: &'a str,
    /// Lowest slot index.
    pub value_min: usize,
    /// Highest slot index.
    pub value_max: usize,
    /// Slot nearest to the current scroll offset.
    pub value_now: usize,
}

impl<'a> AccessibilityInfo<'a> {
    /// Role used for the carousel viewport.
    pub const ROLE: &'static str = "img";

    pub(crate) fn new(label: &'a str, count: usize, current: usize) -> Self {
        let value_max = count.saturating_sub(1);
        Self {
            role: Self::ROLE,
            label,
            value_min: 0,
            value_max,
            value_now: current.min(value_max),
        }
    }
}
