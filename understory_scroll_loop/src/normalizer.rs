// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loop normalization: keep a looping scroll position inside the middle copy
//! of a triplicated track.
//!
//! When looping, the scrollable track holds three back-to-back copies of the
//! collection, each `loop_extent` long:
//!
//! ```text
//! 0            L             2L            3L
//! |  trailing  |   primary   |   leading   |
//! ```
//!
//! Whenever the real offset leaves the primary range the normalizer shifts it
//! by exactly one `loop_extent` back into it. The shifted position shows the
//! same items at the same place on screen, so the rewrite is invisible, and
//! the user can keep scrolling in either direction forever.

use understory_virtual_list::{AxisConfig, Scalar};

use crate::ScrollPort;

/// What [`LoopNormalizer::observe_scroll`] did to the real scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Correction {
    /// The offset was already inside the primary range (or looping is off).
    None,
    /// The offset was shifted by one loop extent.
    Wrapped {
        /// Offset read from the surface.
        from: f64,
        /// Offset written back to the surface.
        to: f64,
    },
}

impl Correction {
    /// Returns `true` if the surface was rewritten.
    #[must_use]
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped { .. })
    }

    /// Signed distance the surface was moved, zero when not wrapped.
    #[must_use]
    pub fn delta(&self) -> f64 {
        match *self {
            Self::None => 0.0,
            Self::Wrapped { from, to } => to - from,
        }
    }
}

/// Tracks a stable logical scroll offset over a [`ScrollPort`].
///
/// Without looping (or with an empty collection) the logical offset is just
/// the real offset. With looping, the real offset is corrected on every
/// observed scroll so that it stays in `[loop_extent, 2 * loop_extent)`, and
/// the logical offset is the corrected value.
///
/// The normalizer also records the most recent container extent, so a
/// consumer always reads a matching offset/extent pair from one place.
#[derive(Clone, Debug)]
pub struct LoopNormalizer {
    len: usize,
    stride: f64,
    looping: bool,
    logical_offset: f64,
    container_extent: f64,
}

impl LoopNormalizer {
    /// Creates a normalizer for `len` items laid out per `config`.
    ///
    /// Call [`LoopNormalizer::prime`] once the surface is available.
    #[must_use]
    pub fn new(config: &AxisConfig<f64>, len: usize) -> Self {
        Self {
            len,
            stride: config.effective_item_extent(),
            looping: config.looping,
            logical_offset: 0.0,
            container_extent: 0.0,
        }
    }

    /// Returns `true` if corrections are active.
    ///
    /// Looping has to be requested and the loop extent has to be positive.
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping && self.len > 0 && self.stride.is_positive_finite()
    }

    /// Size of one pass through the collection, or zero when not looping.
    #[must_use]
    pub fn loop_extent(&self) -> f64 {
        if self.is_looping() {
            f64::from_usize(self.len) * self.stride
        } else {
            0.0
        }
    }

    /// Bounds of the primary range, `[loop_extent, 2 * loop_extent)`.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.is_looping().then(|| {
            let loop_extent = self.loop_extent();
            (loop_extent, 2.0 * loop_extent)
        })
    }

    /// Last logical scroll offset.
    #[must_use]
    pub fn logical_offset(&self) -> f64 {
        self.logical_offset
    }

    /// Last observed container extent.
    #[must_use]
    pub fn container_extent(&self) -> f64 {
        self.container_extent
    }

    /// Initializes state from the surface.
    ///
    /// Reads the container extent. When looping, moves the surface to the
    /// start of the primary range so a full loop of duplicate content is
    /// reachable in either direction; otherwise adopts the current offset.
    pub fn prime<P: ScrollPort + ?Sized>(&mut self, port: &mut P) {
        self.container_extent = port.container_extent();
        if self.is_looping() {
            let start = self.loop_extent();
            if port.scroll_offset() != start {
                port.set_scroll_offset(start);
            }
            self.logical_offset = start;
        } else {
            self.logical_offset = port.scroll_offset();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            looping = self.is_looping(),
            loop_extent = self.loop_extent(),
            logical_offset = self.logical_offset,
            container_extent = self.container_extent,
            "primed loop normalizer"
        );
    }

    /// Reads the surface's offset and folds it back into the primary range.
    ///
    /// The correction, if any, is written to the surface synchronously before
    /// this returns, and the logical offset is taken from the corrected value
    /// rather than read back from the surface.
    pub fn observe_scroll<P: ScrollPort + ?Sized>(&mut self, port: &mut P) -> Correction {
        let raw = port.scroll_offset();
        let (logical, correction) = self.normalize(raw);
        if let Correction::Wrapped { to, .. } = correction {
            port.set_scroll_offset(to);

            #[cfg(feature = "tracing")]
            tracing::trace!(from = raw, to, "wrapped loop scroll offset");
        }
        self.logical_offset = logical;
        correction
    }

    /// Computes the logical offset for a raw offset without touching state.
    #[must_use]
    pub fn normalize(&self, raw: f64) -> (f64, Correction) {
        let Some((lower, upper)) = self.bounds() else {
            return (raw, Correction::None);
        };
        let loop_extent = lower;
        let to = if raw < lower {
            raw + loop_extent
        } else if raw >= upper {
            raw - loop_extent
        } else {
            return (raw, Correction::None);
        };
        (to, Correction::Wrapped { from: raw, to })
    }

    /// Records a new container extent.
    pub fn observe_resize(&mut self, extent: f64) {
        self.container_extent = extent;
    }

    /// Applies a new collection length or axis configuration.
    ///
    /// When the loop geometry changes (length, effective item extent, or the
    /// looping flag) the normalizer is primed again, which re-centers a
    /// looping surface at the start of the primary range. Returns whether
    /// that happened.
    pub fn reconfigure<P: ScrollPort + ?Sized>(
        &mut self,
        config: &AxisConfig<f64>,
        len: usize,
        port: &mut P,
    ) -> bool {
        let stride = config.effective_item_extent();
        let unchanged = self.len == len
            && self.looping == config.looping
            && (self.stride == stride || (self.stride.is_nan() && stride.is_nan()));
        if unchanged {
            return false;
        }
        self.len = len;
        self.stride = stride;
        self.looping = config.looping;
        self.prime(port);
        true
    }
}
