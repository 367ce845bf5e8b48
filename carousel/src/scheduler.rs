// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Handle for one requested redraw.
///
/// Tickets are ordered by request time. A ticket goes stale as soon as a newer
/// request supersedes it or the pending frame is taken or cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameTicket(u64);

/// Coalesces redraw requests into at most one pending frame.
///
/// Every call to [`request`](Self::request) bumps a generation counter and
/// replaces whatever was pending, so a burst of drag moves between two frames
/// renders once, with the latest offset. Hosts that schedule frames with a
/// timer or animation callback keep the returned [`FrameTicket`] and pass it
/// to [`fire`](Self::fire) when the callback runs; stale callbacks are
/// rejected.
#[derive(Clone, Debug, Default)]
pub struct RedrawScheduler {
    generation: u64,
    pending: Option<FrameTicket>,
    superseded: u64,
}

impl RedrawScheduler {
    /// Creates an idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a redraw, superseding any pending one.
    pub fn request(&mut self) -> FrameTicket {
        self.generation = self.generation.wrapping_add(1);
        let ticket = FrameTicket(self.generation);
        if self.pending.replace(ticket).is_some() {
            self.superseded += 1;
        }
        ticket
    }

    /// Returns `true` if a redraw is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `true` if `ticket` is the pending request.
    pub fn is_current(&self, ticket: FrameTicket) -> bool {
        self.pending == Some(ticket)
    }

    /// Takes the pending request, leaving the scheduler idle.
    pub fn take_frame(&mut self) -> Option<FrameTicket> {
        self.pending.take()
    }

    /// Consumes `ticket` if it is still current.
    ///
    /// Returns `false` for stale tickets; the pending request, if any, is left
    /// untouched in that case.
    pub fn fire(&mut self, ticket: FrameTicket) -> bool {
        if self.is_current(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drops the pending request without rendering.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Number of requests that were replaced before they rendered.
    pub fn superseded_count(&self) -> u64 {
        self.superseded
    }
}
