// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carousel_compositor::RgbaSurface;
use kurbo::Size;
use peniko::Color;
use thiserror::Error;

/// Rejected carousel configuration.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The viewport must be strictly positive in both dimensions.
    #[error("viewport must have positive dimensions, got {width} x {height}")]
    InvalidGeometry {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
}

/// Carousel settings.
///
/// Defaults to a 640 x 400 viewport with a transparent background.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Viewport (and slot) width in pixels.
    pub width: f64,
    /// Viewport (and slot) height in pixels.
    pub height: f64,
    /// Human-readable label exposed to assistive technology.
    pub label: String,
    /// Color behind letterboxed images.
    pub background: Color,
}

impl CarouselConfig {
    /// Sets the viewport size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the accessible label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Viewport size.
    pub fn viewport(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// CPU raster surface the size of the viewport, cleared to
    /// [`background`](Self::background).
    ///
    /// Fractional sizes round up to whole pixels.
    pub fn raster_surface(&self) -> RgbaSurface {
        RgbaSurface::new(pixel_extent(self.width), pixel_extent(self.height))
            .with_background(self.background)
    }

    /// Checks that the viewport has a positive, finite size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if positive(self.width) && positive(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidGeometry {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 400.0,
            label: "Image carousel".to_owned(),
            background: Color::TRANSPARENT,
        }
    }
}

fn pixel_extent(extent: f64) -> u32 {
    let clamped = extent.ceil().clamp(0.0, f64::from(u32::MAX));
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Clamped to the u32 range above"
    )]
    {
        clamped as u32
    }
}
