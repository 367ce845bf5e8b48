// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CPU raster surface backed by [`image::RgbaImage`].

use core::borrow::Borrow;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use kurbo::Size;
use peniko::Color;

use crate::surface::{IntrinsicSize, Surface};

impl IntrinsicSize for RgbaImage {
    fn intrinsic_size(&self) -> Size {
        Size::new(f64::from(self.width()), f64::from(self.height()))
    }
}

/// Straight-alpha RGBA8 pixel buffer that images can be composited onto.
///
/// `clear` resets pixels to the background color, which is fully transparent
/// unless set with [`RgbaSurface::with_background`]. `draw_image` resamples
/// the source to the placement size (rounded to whole pixels) and blends it at
/// the rounded placement origin. Anything outside the buffer is clipped.
#[derive(Debug, Clone)]
pub struct RgbaSurface {
    pixels: RgbaImage,
    background: Rgba<u8>,
    filter: FilterType,
}

impl RgbaSurface {
    /// Creates a transparent surface of `width` x `height` pixels.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            background: Rgba([0, 0, 0, 0]),
            filter: FilterType::Triangle,
        }
    }

    /// Sets the color used by `clear`.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        let c = color.to_rgba8();
        self.background = Rgba([c.r, c.g, c.b, c.a]);
        self
    }

    /// Sets the resampling filter used when scaling images.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Current pixels.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consumes the surface, returning its pixels.
    #[must_use]
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

impl<I> Surface<I> for RgbaSurface
where
    I: Borrow<RgbaImage> + ?Sized,
{
    fn clear(&mut self, width: f64, height: f64) {
        let w = covered_pixels(width, self.pixels.width());
        let h = covered_pixels(height, self.pixels.height());
        for row in self.pixels.rows_mut().take(h as usize) {
            for pixel in row.take(w as usize) {
                *pixel = self.background;
            }
        }
    }

    fn draw_image(&mut self, image: &I, x: f64, y: f64, width: f64, height: f64) {
        let (Some((x0, w)), Some((y0, h))) = (snap_span(x, width), snap_span(y, height)) else {
            return;
        };
        let scaled = imageops::resize(image.borrow(), w, h, self.filter);
        imageops::overlay(&mut self.pixels, &scaled, x0, y0);
    }
}

/// Number of pixels along an axis covered by `extent`, capped at `limit`.
fn covered_pixels(extent: f64, limit: u32) -> u32 {
    if extent.is_nan() || extent <= 0.0 {
        return 0;
    }
    let capped = extent.ceil().min(f64::from(limit));
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Value is non-negative and capped at a u32 limit"
    )]
    {
        capped as u32
    }
}

/// Snaps `[start, start + extent)` to whole pixel edges.
///
/// Both edges are rounded, so spans that touch in float space also touch on the
/// pixel grid. Returns the first pixel and the pixel count, or `None` when
/// nothing would be visible.
fn snap_span(start: f64, extent: f64) -> Option<(i64, u32)> {
    let first = start.round();
    let count = (start + extent).round() - first;
    if !first.is_finite() || !(1.0..=f64::from(u32::MAX)).contains(&count) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Count is range checked against u32 and surface coordinates are far inside i64"
    )]
    {
        Some((first as i64, count as u32))
    }
}
