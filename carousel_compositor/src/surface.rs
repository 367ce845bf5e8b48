// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Anything with intrinsic pixel dimensions that can be placed in a slot.
pub trait IntrinsicSize {
    /// Natural width and height of the image in pixels.
    fn intrinsic_size(&self) -> Size;
}

impl<T: IntrinsicSize + ?Sized> IntrinsicSize for &T {
    fn intrinsic_size(&self) -> Size {
        (**self).intrinsic_size()
    }
}

impl<T: IntrinsicSize + ?Sized> IntrinsicSize for alloc::sync::Arc<T> {
    fn intrinsic_size(&self) -> Size {
        (**self).intrinsic_size()
    }
}

/// Minimal 2D drawing target, in the spirit of a canvas context.
///
/// The compositor uses nothing beyond these two primitives. Coordinates are in
/// surface pixels with the origin at the top-left corner; placements may lie
/// partly outside the surface and implementations are expected to clip.
pub trait Surface<I: ?Sized> {
    /// Erase the rectangle `(0, 0, width, height)`.
    fn clear(&mut self, width: f64, height: f64);

    /// Draw `image` scaled into the rectangle at `(x, y)` with the given size.
    fn draw_image(&mut self, image: &I, x: f64, y: f64, width: f64, height: f64);
}

impl<I: ?Sized, S: Surface<I> + ?Sized> Surface<I> for &mut S {
    fn clear(&mut self, width: f64, height: f64) {
        (**self).clear(width, height);
    }

    fn draw_image(&mut self, image: &I, x: f64, y: f64, width: f64, height: f64) {
        (**self).draw_image(image, x, y, width, height);
    }
}
