// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carousel_scroll::DragEvent;
use kurbo::Point;

/// Raw pointer and touch input delivered by the host, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<'a> {
    /// Primary button pressed.
    PointerDown(Point),
    /// Pointer moved.
    PointerMove(Point),
    /// Primary button released.
    PointerUp,
    /// Pointer left the viewport.
    PointerLeave,
    /// Touch began; the first point drives the drag.
    TouchStart(&'a [Point]),
    /// Touch points moved.
    TouchMove(&'a [Point]),
    /// Last touch lifted.
    TouchEnd,
    /// Touch sequence aborted by the platform.
    TouchCancel,
}

impl InputEvent<'_> {
    /// Reduces this input to a horizontal drag event.
    ///
    /// Only the x coordinate matters. Touch events follow the first touch
    /// point; a touch event with no points yields `None`. Leaving the viewport
    /// ends the drag like a release does, while a platform touch cancel maps to
    /// [`DragEvent::Cancel`].
    pub fn to_drag_event(&self) -> Option<DragEvent> {
        match *self {
            Self::PointerDown(p) => Some(DragEvent::Start(p.x)),
            Self::PointerMove(p) => Some(DragEvent::Move(p.x)),
            Self::TouchStart(points) => points.first().map(|p| DragEvent::Start(p.x)),
            Self::TouchMove(points) => points.first().map(|p| DragEvent::Move(p.x)),
            Self::PointerUp | Self::PointerLeave | Self::TouchEnd => Some(DragEvent::End),
            Self::TouchCancel => Some(DragEvent::Cancel),
        }
    }
}
