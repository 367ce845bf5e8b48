// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Size and centering offset of an image letterboxed into a slot.
///
/// Produced by [`fit`]. Offsets are relative to the slot origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    /// Width the image is drawn at.
    pub draw_width: f64,
    /// Height the image is drawn at.
    pub draw_height: f64,
    /// Horizontal inset from the slot's left edge.
    pub offset_x: f64,
    /// Vertical inset from the slot's top edge.
    pub offset_y: f64,
}

impl Fit {
    /// Drawn size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.draw_width, self.draw_height)
    }

    /// Destination rectangle for a slot whose top-left corner is `slot_origin`.
    #[must_use]
    pub fn rect_in_slot(&self, slot_origin: Point) -> Rect {
        Rect::from_origin_size(
            (slot_origin.x + self.offset_x, slot_origin.y + self.offset_y),
            self.size(),
        )
    }
}

/// Contain-fits an image of size `intrinsic` into a slot of size `slot`.
///
/// The aspect ratio is preserved and the image is centered on the axis it
/// does not fill. Images relatively wider than the slot fill its width;
/// everything else, including an exact aspect match, fills its height.
///
/// Both sizes must have non-zero dimensions; callers guarantee this.
///
/// ```
/// use carousel_compositor::fit;
/// use kurbo::Size;
///
/// let f = fit(Size::new(800.0, 400.0), Size::new(600.0, 400.0));
/// assert_eq!((f.draw_width, f.draw_height), (600.0, 300.0));
/// assert_eq!((f.offset_x, f.offset_y), (0.0, 50.0));
/// ```
#[must_use]
pub fn fit(intrinsic: Size, slot: Size) -> Fit {
    let slot_aspect = slot.width / slot.height;
    let image_aspect = intrinsic.width / intrinsic.height;

    if image_aspect > slot_aspect {
        let draw_height = slot.width / image_aspect;
        Fit {
            draw_width: slot.width,
            draw_height,
            offset_x: 0.0,
            offset_y: (slot.height - draw_height) / 2.0,
        }
    } else {
        let draw_width = slot.height * image_aspect;
        Fit {
            draw_width,
            draw_height: slot.height,
            offset_x: (slot.width - draw_width) / 2.0,
            offset_y: 0.0,
        }
    }
}
