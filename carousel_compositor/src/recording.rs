// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::surface::Surface;

/// Drawing command captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command<I> {
    /// The surface was cleared.
    Clear {
        /// Cleared width.
        width: f64,
        /// Cleared height.
        height: f64,
    },
    /// An image was drawn.
    DrawImage {
        /// The image handle passed to [`Surface::draw_image`].
        image: I,
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Drawn width.
        width: f64,
        /// Drawn height.
        height: f64,
    },
}

/// Surface that records commands instead of rasterizing.
///
/// It is intended for tests and debugging that want to assert on the exact
/// sequence of clears and draws. Image handles are cloned into the log, so
/// cheap handles (indices, `Arc`s) work best.
#[derive(Debug)]
pub struct RecordingSurface<I> {
    commands: Vec<Command<I>>,
}

impl<I> RecordingSurface<I> {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Commands in the order they were issued.
    pub fn commands(&self) -> &[Command<I>] {
        &self.commands
    }

    /// Number of clears recorded.
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Clear { .. }))
            .count()
    }

    /// Number of image draws recorded.
    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::DrawImage { .. }))
            .count()
    }

    /// Forgets all recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl<I> Default for RecordingSurface<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Clone> Surface<I> for RecordingSurface<I> {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(Command::Clear { width, height });
    }

    fn draw_image(&mut self, image: &I, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(Command::DrawImage {
            image: image.clone(),
            x,
            y,
            width,
            height,
        });
    }
}
