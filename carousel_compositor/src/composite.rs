// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::fit::fit;
use crate::surface::{IntrinsicSize, Surface};

/// Where one visible image was drawn during a [`composite`] pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Index of the image in the slice passed to [`composite`].
    pub index: usize,
    /// Left edge in surface coordinates.
    pub x: f64,
    /// Top edge in surface coordinates.
    pub y: f64,
    /// Drawn width.
    pub width: f64,
    /// Drawn height.
    pub height: f64,
}

impl Placement {
    /// Destination rectangle in surface coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Returns `true` if a viewport-wide slot starting at `slot_x` (in surface
/// coordinates) overlaps the surface.
///
/// This is the interval overlap of `[slot_x, slot_x + viewport_width)` with
/// `[0, viewport_width)`. It is only a general culling test because every slot
/// is exactly one viewport wide; variable slot widths need their own extent in
/// the first term.
#[must_use]
pub fn slot_is_visible(slot_x: f64, viewport_width: f64) -> bool {
    slot_x + viewport_width > 0.0 && slot_x < viewport_width
}

/// Iterates `(index, slot_x)` for the slots of a `count`-long strip that are
/// visible at `scroll_offset`, in index order.
pub fn visible_slots(
    count: usize,
    scroll_offset: f64,
    viewport_width: f64,
) -> impl Iterator<Item = (usize, f64)> {
    (0..count)
        .map(move |index| (index, index as f64 * viewport_width - scroll_offset))
        .filter(move |&(_, slot_x)| slot_is_visible(slot_x, viewport_width))
}

/// Draws one frame of a horizontal strip of viewport-sized slots.
///
/// The whole viewport is cleared first, then every visible image is
/// contain-fitted into its slot and drawn, in index order. Returns the
/// placements that were drawn.
///
/// # Panics
///
/// Panics if either viewport dimension is not strictly positive.
///
/// ```
/// use carousel_compositor::{Command, IntrinsicSize, RecordingSurface, composite};
/// use kurbo::Size;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Photo(Size);
///
/// impl IntrinsicSize for Photo {
///     fn intrinsic_size(&self) -> Size {
///         self.0
///     }
/// }
///
/// let photos = vec![Photo(Size::new(800.0, 400.0)); 3];
/// let mut surface = RecordingSurface::new();
/// let placed = composite(&mut surface, &photos, 700.0, Size::new(600.0, 400.0));
///
/// assert_eq!(placed.len(), 2);
/// assert!(matches!(surface.commands()[0], Command::Clear { .. }));
/// ```
pub fn composite<I, S>(
    surface: &mut S,
    images: &[I],
    scroll_offset: f64,
    viewport: Size,
) -> Vec<Placement>
where
    I: IntrinsicSize,
    S: Surface<I> + ?Sized,
{
    assert!(
        viewport.width > 0.0 && viewport.height > 0.0,
        "viewport must have positive dimensions, got {viewport:?}"
    );

    surface.clear(viewport.width, viewport.height);

    let mut placements = Vec::new();
    for (index, slot_x) in visible_slots(images.len(), scroll_offset, viewport.width) {
        let image = &images[index];
        let rect = fit(image.intrinsic_size(), viewport).rect_in_slot(Point::new(slot_x, 0.0));
        surface.draw_image(image, rect.x0, rect.y0, rect.width(), rect.height());
        placements.push(Placement {
            index,
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
        });
    }
    placements
}
