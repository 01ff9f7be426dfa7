// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A windowed view over a scroll surface for the lifetime of one mount.

use core::hash::Hash;
use core::time::Duration;

use kurbo::{Size, Vec2};
use smallvec::SmallVec;
use understory_virtual_list::{
    Axis, AxisConfig, DEFAULT_OVERSCAN, TrackGeometry, VisibleWindow, WindowEntry, WindowSpan,
    compute_track_geometry, compute_window,
};

use crate::{
    Correction, LoopNormalizer, PortEvent, PortEventKind, PresentedSet, ScrollPort,
    SubscriptionId, Throttle,
};

/// Drives window computation from a live [`ScrollPort`].
///
/// A session subscribes to scroll and resize notifications when created and
/// unsubscribes when dropped, so a removed surface is never left with
/// listeners pointing at a dead session. In between, the host forwards
/// notifications through [`LoopSession::handle`], calls
/// [`LoopSession::poll`] when [`LoopSession::next_deadline`] passes, and asks
/// for a [`Frame`] whenever it renders.
///
/// Hosts that need the port back after the session ends can hand the session
/// a `&mut` reference instead of the port itself.
///
/// ```rust
/// use core::time::Duration;
/// use understory_scroll_loop::{LoopSession, MemoryScrollPort};
/// use understory_virtual_list::AxisConfig;
///
/// let items: Vec<u32> = (0..10).collect();
/// let config = AxisConfig::new(100.0).with_looping(true);
/// let mut port = MemoryScrollPort::new(250.0);
///
/// {
///     let mut session = LoopSession::new(&mut port, config, items.len()).with_overscan(2);
///     assert_eq!(session.logical_offset(), 1_000.0);
///
///     // The user drags back past the start of the primary range.
///     let event = session.port_mut().scroll_by(-150.0).unwrap();
///     session.handle(event, Duration::ZERO);
///     assert_eq!(session.logical_offset(), 1_850.0);
///
///     let frame = session.frame(&items);
///     assert_eq!(frame.window.start_index(), 16);
///     assert_eq!(frame.geometry.total_extent, 3_000.0);
/// }
///
/// // Dropping the session removed its listeners.
/// assert_eq!(port.subscription_count(), 0);
/// ```
#[derive(Debug)]
pub struct LoopSession<P: ScrollPort> {
    port: P,
    config: AxisConfig<f64>,
    len: usize,
    overscan: usize,
    normalizer: LoopNormalizer,
    throttle: Throttle,
    subscriptions: SmallVec<[SubscriptionId; 2]>,
}

impl<P: ScrollPort> LoopSession<P> {
    /// Attaches to `port` for a collection of `len` items.
    ///
    /// Subscribes to scroll and resize notifications, reads the container
    /// extent, and, when looping, moves the surface to the start of the
    /// primary range.
    pub fn new(mut port: P, config: AxisConfig<f64>, len: usize) -> Self {
        let mut subscriptions = SmallVec::new();
        subscriptions.push(port.subscribe(PortEventKind::Scroll));
        subscriptions.push(port.subscribe(PortEventKind::Resize));

        let mut normalizer = LoopNormalizer::new(&config, len);
        normalizer.prime(&mut port);

        Self {
            port,
            config,
            len,
            overscan: DEFAULT_OVERSCAN,
            normalizer,
            throttle: Throttle::default(),
            subscriptions,
        }
    }

    /// Returns this session with a different overscan.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Returns this session with a different scroll throttle interval.
    #[must_use]
    pub fn with_throttle_interval(mut self, interval: Duration) -> Self {
        self.throttle.set_interval(interval);
        self
    }

    /// The scroll surface.
    #[must_use]
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Mutable access to the scroll surface.
    ///
    /// Offsets written here are not observed until the next
    /// [`PortEvent::Scroll`] is handled.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Current axis configuration.
    #[must_use]
    pub fn config(&self) -> &AxisConfig<f64> {
        &self.config
    }

    /// Current collection length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current overscan.
    #[must_use]
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Sets the overscan used by later frames.
    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    /// The loop normalizer backing this session.
    #[must_use]
    pub fn normalizer(&self) -> &LoopNormalizer {
        &self.normalizer
    }

    /// Latest logical scroll offset.
    #[must_use]
    pub fn logical_offset(&self) -> f64 {
        self.normalizer.logical_offset()
    }

    /// Latest container extent.
    #[must_use]
    pub fn container_extent(&self) -> f64 {
        self.normalizer.container_extent()
    }

    /// Handles a notification from the surface at host time `now`.
    ///
    /// Resizes apply immediately. Scrolls go through the throttle: the first
    /// scroll of a burst is applied now, later ones are deferred to
    /// [`LoopSession::poll`]. Returns `true` if state changed and the host
    /// should build a new frame.
    pub fn handle(&mut self, event: PortEvent, now: Duration) -> bool {
        match event {
            PortEvent::Resize { extent } => {
                self.normalizer.observe_resize(extent);
                true
            }
            PortEvent::Scroll => {
                if self.throttle.submit(now) {
                    self.sync_scroll();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Applies a deferred scroll if its time has come.
    ///
    /// Returns `true` if state changed.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.throttle.poll(now) {
            self.sync_scroll();
            true
        } else {
            false
        }
    }

    /// When [`LoopSession::poll`] should be called next, if a scroll is
    /// pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.throttle.next_deadline()
    }

    /// Changes the collection length.
    ///
    /// Returns `true` if the surface was re-centered.
    pub fn set_len(&mut self, len: usize) -> bool {
        self.len = len;
        self.reconfigure()
    }

    /// Changes the axis configuration.
    ///
    /// When the orientation changes, the container extent is read again from
    /// the port, which must by then report the extent along the new axis.
    ///
    /// Returns `true` if the surface was re-centered.
    pub fn set_config(&mut self, config: AxisConfig<f64>) -> bool {
        let axis_changed = self.config.orientation != config.orientation;
        self.config = config;
        let recentered = self.reconfigure();
        if axis_changed && !recentered {
            self.normalizer.observe_resize(self.port.container_extent());
        }
        recentered
    }

    /// Window span for the current state, without resolving items.
    #[must_use]
    pub fn span(&self) -> WindowSpan {
        compute_window(
            self.normalizer.logical_offset(),
            self.normalizer.container_extent(),
            &self.config,
            self.len,
            self.overscan,
        )
    }

    /// Track geometry for the current state.
    #[must_use]
    pub fn geometry(&self) -> TrackGeometry<f64> {
        compute_track_geometry(self.span().start_index, &self.config, self.len)
    }

    /// Builds everything needed to render the current state.
    ///
    /// The window and geometry are recomputed from the latest offset and
    /// extent on every call. `items` must have the length last given to the
    /// session; otherwise the window is empty.
    #[must_use]
    pub fn frame<'a, T>(&self, items: &'a [T]) -> Frame<'a, T> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "loop_frame",
            len = self.len,
            logical_offset = self.logical_offset(),
            container_extent = self.container_extent()
        )
        .entered();

        #[cfg(feature = "tracing")]
        if items.len() != self.len {
            tracing::warn!(
                expected = self.len,
                actual = items.len(),
                "collection length changed without LoopSession::set_len"
            );
        }

        let span = self.span();
        let geometry = compute_track_geometry(span.start_index, &self.config, self.len);
        Frame {
            window: span.resolve(items),
            span,
            geometry,
            logical_offset: self.normalizer.logical_offset(),
        }
    }

    fn sync_scroll(&mut self) -> Correction {
        self.normalizer.observe_scroll(&mut self.port)
    }

    fn reconfigure(&mut self) -> bool {
        self.normalizer.reconfigure(&self.config, self.len, &mut self.port)
    }
}

impl<P: ScrollPort> Drop for LoopSession<P> {
    fn drop(&mut self) {
        self.throttle.cancel();
        for id in self.subscriptions.drain(..) {
            self.port.unsubscribe(id);
        }
    }
}

/// Everything a host needs to render one state of a [`LoopSession`].
#[derive(Clone, Debug)]
pub struct Frame<'a, T> {
    /// Realized items paired with their logical positions.
    pub window: VisibleWindow<'a, T>,
    /// The span the window was resolved from.
    pub span: WindowSpan,
    /// Strip translation and total track extent.
    pub geometry: TrackGeometry<f64>,
    /// Logical scroll offset the frame was computed at.
    pub logical_offset: f64,
}

impl<'a, T> Frame<'a, T> {
    /// Translation to apply to the realized strip.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        let (x, y) = self.geometry.translation();
        Vec2::new(x, y)
    }

    /// Size of the scrollable track, given its extent across the scroll axis.
    #[must_use]
    pub fn track_size(&self, cross_extent: f64) -> Size {
        match self.geometry.axis() {
            Axis::X => Size::new(self.geometry.total_extent, cross_extent),
            Axis::Y => Size::new(cross_extent, self.geometry.total_extent),
        }
    }

    /// Pairs each realized entry with whether its key was presented before.
    pub fn with_presence<'s, K, F>(
        &'s self,
        presented: &'s PresentedSet<K>,
        key: F,
    ) -> impl Iterator<Item = (&'s WindowEntry<'a, T>, bool)> + 's
    where
        K: Eq + Hash,
        F: Fn(&T) -> K + 's,
    {
        self.window
            .iter()
            .map(move |entry| (entry, presented.contains(&key(entry.item))))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::time::Duration;

    use understory_virtual_list::{Axis, AxisConfig, Orientation};

    use super::LoopSession;
    use crate::{MemoryScrollPort, PresentedSet, ScrollPort};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn drop_unsubscribes_every_listener() {
        let mut port = MemoryScrollPort::new(100.0);
        {
            let session = LoopSession::new(&mut port, AxisConfig::new(10.0), 5);
            assert_eq!(session.port().subscription_count(), 2);
        }
        assert_eq!(port.subscription_count(), 0);
    }

    #[test]
    fn resize_and_scroll_in_one_frame_are_both_visible() {
        let items: Vec<u32> = (0..100).collect();
        let mut port = MemoryScrollPort::new(100.0);
        let mut session =
            LoopSession::new(&mut port, AxisConfig::new(10.0), items.len()).with_overscan(0);

        let scroll = session.port_mut().scroll_to(200.0).unwrap();
        let resize = session.port_mut().resize(50.0).unwrap();
        assert!(session.handle(scroll, ms(0)));
        assert!(session.handle(resize, ms(1)));

        let frame = session.frame(&items);
        let shown: Vec<u32> = frame.window.iter().map(|e| *e.item).collect();
        assert_eq!(shown, [20, 21, 22, 23, 24]);
    }

    #[test]
    fn throttled_burst_settles_on_final_offset() {
        let items: Vec<u32> = (0..10).collect();
        let config = AxisConfig::new(100.0).with_looping(true);
        let mut port = MemoryScrollPort::new(250.0);
        let mut session = LoopSession::new(&mut port, config, items.len());

        let first = session.port_mut().scroll_by(-10.0).unwrap();
        assert!(session.handle(first, ms(0)));
        assert_eq!(session.logical_offset(), 990.0 + 1_000.0);

        // The rest of the burst is swallowed until the trailing edge.
        for step in 1..5 {
            let event = session.port_mut().scroll_by(-100.0).unwrap();
            assert!(!session.handle(event, ms(step)));
        }
        assert_eq!(session.logical_offset(), 1_990.0);
        assert_eq!(session.next_deadline(), Some(ms(10)));

        assert!(!session.poll(ms(9)));
        assert!(session.poll(ms(10)));
        assert_eq!(session.logical_offset(), 1_590.0);
        assert_eq!(session.port().scroll_offset(), 1_590.0);
    }

    #[test]
    fn set_len_recenters_looping_surface() {
        let mut port = MemoryScrollPort::new(250.0);
        let config = AxisConfig::new(50.0).with_looping(true);
        let mut session = LoopSession::new(&mut port, config, 4);
        assert_eq!(session.logical_offset(), 200.0);

        assert!(session.set_len(8));
        assert_eq!(session.logical_offset(), 400.0);
        assert!(!session.set_len(8));
    }

    #[test]
    fn vertical_frame_maps_geometry_onto_y() {
        let items = [0_u8; 20];
        let config = AxisConfig::new(30.0)
            .with_gap(10.0)
            .with_orientation(Orientation::Vertical);
        let mut port = MemoryScrollPort::new(100.0);
        let mut session = LoopSession::new(&mut port, config, items.len()).with_overscan(1);

        let event = session.port_mut().scroll_to(205.0).unwrap();
        session.handle(event, ms(0));
        let frame = session.frame(&items);

        assert_eq!(frame.span.start_index, 4);
        assert_eq!(frame.translation().x, 0.0);
        assert_eq!(frame.translation().y, 160.0);
        let size = frame.track_size(320.0);
        assert_eq!(size.width, 320.0);
        assert_eq!(size.height, 20.0 * 40.0 - 10.0);
    }

    #[test]
    fn presence_reflects_presented_set() {
        let items = [7_u32, 8, 9];
        let mut port = MemoryScrollPort::new(30.0);
        let session =
            LoopSession::new(&mut port, AxisConfig::new(10.0), items.len()).with_overscan(0);
        let mut presented = PresentedSet::new();
        presented.mark(8_u32);

        let frame = session.frame(&items);
        let presence: Vec<(u32, bool)> = frame
            .with_presence(&presented, |item| *item)
            .map(|(entry, seen)| (*entry.item, seen))
            .collect();
        assert_eq!(presence, [(7, false), (8, true), (9, false)]);
    }

    #[test]
    fn stale_collection_yields_empty_frame() {
        let items: Vec<u32> = (0..10).collect();
        let port = MemoryScrollPort::new(250.0);
        let session = LoopSession::new(port, AxisConfig::new(100.0), 12);

        let frame = session.frame(&items);
        assert!(frame.window.is_empty());
        assert_eq!(frame.span.len, 12);
        assert_eq!(frame.geometry.total_extent, 1_200.0);
    }

    #[test]
    fn orientation_change_rereads_container_extent() {
        let mut port = MemoryScrollPort::new(300.0);
        let mut session = LoopSession::new(&mut port, AxisConfig::new(50.0), 40);
        assert_eq!(session.container_extent(), 300.0);

        // The host's surface now measures along the vertical axis.
        let _ = session.port_mut().resize(120.0);
        let vertical = AxisConfig::new(50.0).with_orientation(Orientation::Vertical);
        assert!(!session.set_config(vertical));
        assert_eq!(session.container_extent(), 120.0);
        assert_eq!(session.geometry().axis(), Axis::Y);
    }

    #[test]
    fn empty_collection_yields_empty_frame() {
        let items: [u32; 0] = [];
        let config = AxisConfig::new(100.0).with_looping(true);
        let mut port = MemoryScrollPort::new(250.0);
        let mut session = LoopSession::new(&mut port, config, 0);
        assert!(session.port().writes().is_empty());

        if let Some(event) = session.port_mut().scroll_to(50.0) {
            session.handle(event, ms(0));
        }
        let frame = session.frame(&items);
        assert!(frame.window.is_empty());
        assert_eq!(frame.geometry.total_extent, 0.0);
        assert_eq!(frame.logical_offset, 50.0);
    }
}
