// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carousel_compositor::{IntrinsicSize, Placement, Surface, composite};
use carousel_loader::LoadError;
use carousel_scroll::{DragScroll, ScrollExtent};
use tracing::{debug, info, warn};

use crate::accessibility::AccessibilityInfo;
use crate::config::{CarouselConfig, ConfigError};
use crate::input::InputEvent;
use crate::scheduler::{FrameTicket, RedrawScheduler};

/// Image acquisition lifecycle.
#[derive(Debug, Default)]
pub enum LoadState<I> {
    /// The batch has not resolved yet.
    #[default]
    Loading,
    /// Every image loaded, in slot order.
    Ready(Vec<I>),
    /// The batch was rejected.
    Failed(LoadError),
}

impl<I> LoadState<I> {
    /// Returns `true` until the batch resolves.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded images, or an empty slice when not [`Ready`](Self::Ready).
    pub fn images(&self) -> &[I] {
        match self {
            Self::Ready(images) => images,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    /// The rejection, if the batch failed.
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

/// A draggable, horizontally scrolling strip of images.
///
/// The carousel starts in [`LoadState::Loading`] with an empty extent. Hosts
/// feed it input through [`handle`](Self::handle), deliver the loader result
/// once through [`finish_loading`](Self::finish_loading), and call
/// [`frame`](Self::frame) from their paint callback.
#[derive(Debug)]
pub struct Carousel<I> {
    config: CarouselConfig,
    scroll: DragScroll,
    state: LoadState<I>,
    redraw: RedrawScheduler,
}

impl<I> Carousel<I> {
    /// Creates a carousel in the loading state.
    ///
    /// Fails if the configured viewport is not strictly positive.
    pub fn new(config: CarouselConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let scroll = DragScroll::new(0.0, config.width);
        let mut redraw = RedrawScheduler::new();
        redraw.request();
        Ok(Self {
            config,
            scroll,
            state: LoadState::Loading,
            redraw,
        })
    }

    /// Applies one input event.
    ///
    /// Returns `true` and schedules a redraw when the offset changed.
    pub fn handle(&mut self, event: InputEvent<'_>) -> bool {
        let Some(drag) = event.to_drag_event() else {
            return false;
        };
        let moved = self.scroll.apply(drag);
        if moved {
            self.redraw.request();
        }
        moved
    }

    /// Resolves the loading state with the loader's result.
    ///
    /// Only the first call has an effect; later completions are ignored and
    /// return `false`. Success sizes the scroll extent to one viewport-wide
    /// slot per image. Either outcome schedules a redraw.
    pub fn finish_loading(&mut self, result: Result<Vec<I>, LoadError>) -> bool {
        if !self.state.is_loading() {
            debug!("late load completion ignored");
            return false;
        }
        match result {
            Ok(images) => {
                info!(count = images.len(), "carousel ready");
                let extent = ScrollExtent::for_slots(images.len(), self.config.width);
                self.scroll.set_extent(extent);
                self.state = LoadState::Ready(images);
            }
            Err(err) => {
                warn!(error = ?err, url = err.url(), "carousel images failed to load");
                self.state = LoadState::Failed(err);
            }
        }
        self.redraw.request();
        true
    }

    /// Scrolls one slot to the right.
    ///
    /// Returns `true` and schedules a redraw when the offset changed.
    pub fn step_next(&mut self) -> bool {
        let moved = self.scroll.step_next();
        if moved {
            self.redraw.request();
        }
        moved
    }

    /// Scrolls one slot to the left.
    ///
    /// Returns `true` and schedules a redraw when the offset changed.
    pub fn step_previous(&mut self) -> bool {
        let moved = self.scroll.step_previous();
        if moved {
            self.redraw.request();
        }
        moved
    }

    /// Accessibility attributes for the current state.
    pub fn accessibility(&self) -> AccessibilityInfo<'_> {
        AccessibilityInfo::new(
            &self.config.label,
            self.state.images().len(),
            self.scroll.current_index(),
        )
    }

    /// Configuration the carousel was built with.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Current load state.
    pub fn load_state(&self) -> &LoadState<I> {
        &self.state
    }

    /// Drag-scroll controller.
    pub fn scroll(&self) -> &DragScroll {
        &self.scroll
    }

    /// Committed scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll.scroll_offset()
    }

    /// Redraw scheduler, for hosts that drive frames with their own timers.
    pub fn redraw(&self) -> &RedrawScheduler {
        &self.redraw
    }

    /// Mutable redraw scheduler.
    pub fn redraw_mut(&mut self) -> &mut RedrawScheduler {
        &mut self.redraw
    }
}

impl<I: IntrinsicSize> Carousel<I> {
    /// Draws the current offset onto `surface`.
    ///
    /// While loading or after a failure the surface is only cleared.
    pub fn render<S>(&self, surface: &mut S) -> Vec<Placement>
    where
        S: Surface<I> + ?Sized,
    {
        match &self.state {
            LoadState::Ready(images) => composite(
                surface,
                images,
                self.scroll.scroll_offset(),
                self.config.viewport(),
            ),
            LoadState::Loading | LoadState::Failed(_) => {
                surface.clear(self.config.width, self.config.height);
                Vec::new()
            }
        }
    }

    /// Renders if a redraw is pending, consuming the request.
    ///
    /// Returns `None` when nothing was scheduled.
    pub fn frame<S>(&mut self, surface: &mut S) -> Option<Vec<Placement>>
    where
        S: Surface<I> + ?Sized,
    {
        let ticket = self.redraw.take_frame()?;
        Some(self.render_ticket(ticket, surface))
    }

    /// Renders for a ticket issued earlier by the scheduler.
    ///
    /// Stale tickets draw nothing and return `None`.
    pub fn fire<S>(&mut self, ticket: FrameTicket, surface: &mut S) -> Option<Vec<Placement>>
    where
        S: Surface<I> + ?Sized,
    {
        if !self.redraw.fire(ticket) {
            debug!(?ticket, "stale frame skipped");
            return None;
        }
        Some(self.render_ticket(ticket, surface))
    }

    fn render_ticket<S>(&self, ticket: FrameTicket, surface: &mut S) -> Vec<Placement>
    where
        S: Surface<I> + ?Sized,
    {
        let placements = self.render(surface);
        debug!(
            ?ticket,
            offset = self.scroll.scroll_offset(),
            drawn = placements.len(),
            "frame committed"
        );
        placements
    }
}
