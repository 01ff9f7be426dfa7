// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track geometry: where to place the realized strip and how large the
//! scrollable track must be.

use crate::{Axis, AxisConfig, Orientation, Scalar};

/// Axis-agnostic placement values for a realized window.
///
/// Hosts map these onto their own styling: `track_offset` becomes a
/// translation of the realized strip (for example `translateX`) and
/// `total_extent` becomes the width or height of the otherwise empty track
/// element so that native scroll ranges line up with the window math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry<S: Scalar> {
    /// Axis the values apply to.
    pub orientation: Orientation,
    /// Signed offset of the first realized slot from the track origin.
    pub track_offset: S,
    /// Full scrollable length of the track.
    pub total_extent: S,
}

impl<S: Scalar> TrackGeometry<S> {
    /// Geometry for an empty track.
    #[must_use]
    pub fn empty(orientation: Orientation) -> Self {
        Self {
            orientation,
            track_offset: S::zero(),
            total_extent: S::zero(),
        }
    }

    /// Screen axis for the translation and the track size.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.orientation.axis()
    }

    /// Returns the translation as an `(x, y)` pair.
    #[must_use]
    pub fn translation(&self) -> (S, S) {
        match self.axis() {
            Axis::X => (self.track_offset, S::zero()),
            Axis::Y => (S::zero(), self.track_offset),
        }
    }
}

/// Computes track placement for a window starting at `start_index`.
///
/// - `track_offset = start_index * effective_item_extent`, negative when a
///   looping window starts before the nominal origin.
/// - `total_extent` is three loop extents when looping (the duplicated track
///   the loop normalizer keeps the scroll position inside) and
///   `len * effective_item_extent - gap` otherwise, since no gap follows
///   the last item.
///
/// An empty collection or a degenerate configuration yields zeroed geometry.
#[must_use]
pub fn compute_track_geometry<S: Scalar>(
    start_index: isize,
    config: &AxisConfig<S>,
    len: usize,
) -> TrackGeometry<S> {
    if len == 0 || config.is_degenerate() {
        return TrackGeometry::empty(config.orientation);
    }

    let stride = config.effective_item_extent();
    let total_extent = if config.looping {
        S::from_usize(3) * config.loop_extent(len)
    } else {
        (S::from_usize(len) * stride - config.gap).max(S::zero())
    };

    TrackGeometry {
        orientation: config.orientation,
        track_offset: S::from_isize(start_index) * stride,
        total_extent,
    }
}
