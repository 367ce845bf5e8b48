// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Borrow;
use std::sync::Arc;

use carousel_compositor::IntrinsicSize;
use image::RgbaImage;
use kurbo::Size;

/// A decoded image and the URL it came from.
///
/// Cloning is cheap; the pixel buffer is shared.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    url: Arc<str>,
    pixels: Arc<RgbaImage>,
}

impl LoadedImage {
    /// Wraps decoded pixels loaded from `url`.
    pub fn new(url: impl Into<Arc<str>>, pixels: RgbaImage) -> Self {
        Self {
            url: url.into(),
            pixels: Arc::new(pixels),
        }
    }

    /// Source URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Intrinsic width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Intrinsic height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Decoded RGBA8 pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl IntrinsicSize for LoadedImage {
    fn intrinsic_size(&self) -> Size {
        self.pixels.intrinsic_size()
    }
}

impl Borrow<RgbaImage> for LoadedImage {
    fn borrow(&self) -> &RgbaImage {
        &self.pixels
    }
}
