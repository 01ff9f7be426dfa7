// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between the scroll engine and a live scrollable surface.
//!
//! Hosts implement [`ScrollPort`] for whatever actually scrolls: a DOM
//! element, a native scroll view, a terminal pane. The engine only ever
//! reads the scroll offset and container extent, writes corrective scroll
//! offsets, and registers interest in scroll and resize notifications.
//!
//! Notifications flow the other way as plain values: when the surface
//! scrolls or resizes, the host passes a [`PortEvent`] to
//! [`LoopSession::handle`](crate::LoopSession::handle). The engine never
//! holds a reference back into host state.
//!
//! [`MemoryScrollPort`] is an in-memory implementation that behaves like a
//! native scroller (offsets clamp to the scrollable range) and records what
//! the engine did to it.

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Kinds of notification an engine can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PortEventKind {
    /// The surface's scroll offset changed.
    Scroll,
    /// The surface's container extent changed.
    Resize,
}

/// A notification delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PortEvent {
    /// The surface scrolled. The engine reads the new offset from the port.
    Scroll,
    /// The surface was resized to `extent` along the scroll axis.
    Resize {
        /// New container extent along the scroll axis.
        extent: f64,
    },
}

impl PortEvent {
    /// Returns the kind of this event.
    #[must_use]
    pub fn kind(&self) -> PortEventKind {
        match self {
            Self::Scroll => PortEventKind::Scroll,
            Self::Resize { .. } => PortEventKind::Resize,
        }
    }
}

/// Handle for a registered scroll listener or resize observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Wraps a host-chosen raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A scrollable surface the engine observes and corrects.
///
/// All values are measured along the configured scroll axis.
///
/// Implementations must apply [`ScrollPort::set_scroll_offset`] immediately
/// and without animation, and must not report the write back as a
/// [`PortEvent::Scroll`].
pub trait ScrollPort {
    /// Current scroll offset of the surface.
    fn scroll_offset(&self) -> f64;

    /// Current size of the visible container.
    fn container_extent(&self) -> f64;

    /// Moves the surface to `offset` in the same frame.
    fn set_scroll_offset(&mut self, offset: f64);

    /// Starts delivering notifications of `kind`.
    fn subscribe(&mut self, kind: PortEventKind) -> SubscriptionId;

    /// Stops delivering notifications for `id`.
    ///
    /// Unknown or already removed ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

impl<P: ScrollPort + ?Sized> ScrollPort for &mut P {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn container_extent(&self) -> f64 {
        (**self).container_extent()
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        (**self).set_scroll_offset(offset);
    }

    fn subscribe(&mut self, kind: PortEventKind) -> SubscriptionId {
        (**self).subscribe(kind)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        (**self).unsubscribe(id);
    }
}

/// In-memory [`ScrollPort`] that behaves like a native scroller.
///
/// Offsets are clamped at zero and, once a content extent is known, at
/// `content_extent - container_extent`. Writes made through
/// [`ScrollPort::set_scroll_offset`] are recorded so tests can tell engine
/// corrections apart from simulated user scrolling.
#[derive(Clone, Debug, Default)]
pub struct MemoryScrollPort {
    offset: f64,
    container_extent: f64,
    content_extent: Option<f64>,
    next_id: u64,
    subscriptions: SmallVec<[(SubscriptionId, PortEventKind); 2]>,
    writes: Vec<f64>,
}

impl MemoryScrollPort {
    /// Creates a port with the given container extent, scrolled to zero.
    #[must_use]
    pub fn new(container_extent: f64) -> Self {
        Self {
            container_extent,
            ..Self::default()
        }
    }

    /// Returns this port with a known content extent.
    #[must_use]
    pub fn with_content_extent(mut self, content_extent: f64) -> Self {
        self.set_content_extent(content_extent);
        self
    }

    /// Sets the content extent and re-clamps the current offset.
    pub fn set_content_extent(&mut self, content_extent: f64) {
        self.content_extent = Some(content_extent);
        self.offset = self.clamp(self.offset);
    }

    /// Largest reachable scroll offset, if the content extent is known.
    #[must_use]
    pub fn max_offset(&self) -> Option<f64> {
        self.content_extent
            .map(|content| (content - self.container_extent).max(0.0))
    }

    /// Simulates the user scrolling to `offset`.
    ///
    /// Returns the notification a real surface would deliver, or `None` when
    /// nothing listens for scrolling or the offset did not change.
    pub fn scroll_to(&mut self, offset: f64) -> Option<PortEvent> {
        let clamped = self.clamp(offset);
        if clamped == self.offset {
            return None;
        }
        self.offset = clamped;
        self.is_subscribed(PortEventKind::Scroll)
            .then_some(PortEvent::Scroll)
    }

    /// Simulates the user scrolling by `delta`.
    pub fn scroll_by(&mut self, delta: f64) -> Option<PortEvent> {
        self.scroll_to(self.offset + delta)
    }

    /// Simulates the container being resized.
    ///
    /// Returns the notification a resize observer would deliver, or `None`
    /// when nothing observes the container or the extent did not change.
    pub fn resize(&mut self, container_extent: f64) -> Option<PortEvent> {
        if container_extent == self.container_extent {
            return None;
        }
        self.container_extent = container_extent;
        self.offset = self.clamp(self.offset);
        self.is_subscribed(PortEventKind::Resize)
            .then_some(PortEvent::Resize {
                extent: container_extent,
            })
    }

    /// Returns `true` if some subscription of `kind` is live.
    #[must_use]
    pub fn is_subscribed(&self, kind: PortEventKind) -> bool {
        self.subscriptions.iter().any(|&(_, k)| k == kind)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Offsets written through [`ScrollPort::set_scroll_offset`], oldest first.
    #[must_use]
    pub fn writes(&self) -> &[f64] {
        &self.writes
    }

    /// Forgets the recorded writes.
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    fn clamp(&self, offset: f64) -> f64 {
        let offset = offset.max(0.0);
        match self.max_offset() {
            Some(max) => offset.min(max),
            None => offset,
        }
    }
}

impl ScrollPort for MemoryScrollPort {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn container_extent(&self) -> f64 {
        self.container_extent
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = self.clamp(offset);
        self.writes.push(self.offset);
    }

    fn subscribe(&mut self, kind: PortEventKind) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscriptions.push((id, kind));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.retain(|&mut (sub, _)| sub != id);
    }
}
