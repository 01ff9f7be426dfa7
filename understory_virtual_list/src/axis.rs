// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll axis configuration shared by the window and geometry computations.

use crate::Scalar;

/// Default number of extra items realized on each side of the visible range.
///
/// Overscan hides pop-in during fast scrolling. The exact value is a tuning
/// knob rather than a correctness requirement; it is applied symmetrically.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Direction along which items are laid out and scrolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Items flow left to right; the scroll offset is horizontal.
    #[default]
    Horizontal,
    /// Items flow top to bottom; the scroll offset is vertical.
    Vertical,
}

/// Screen axis that a 1D value should be applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis: widths and `translateX`.
    X,
    /// Vertical axis: heights and `translateY`.
    Y,
}

impl Orientation {
    /// Returns the screen axis that scroll offsets and extents refer to.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Horizontal => Axis::X,
            Self::Vertical => Axis::Y,
        }
    }

    /// Returns `true` for [`Orientation::Vertical`].
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

/// Layout of a strip of uniformly sized items along one axis.
///
/// Every item occupies `item_extent` along the scroll axis and is followed by
/// `gap` of empty space (except, for the purpose of the non-looping total
/// extent, the last one). When `looping` is enabled the strip is treated as
/// infinitely repeating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisConfig<S: Scalar> {
    /// Scroll direction.
    pub orientation: Orientation,
    /// Size of a single item along the scroll axis.
    pub item_extent: S,
    /// Space between adjacent items along the scroll axis.
    pub gap: S,
    /// Whether the strip wraps around at both ends.
    pub looping: bool,
}

impl<S: Scalar> AxisConfig<S> {
    /// Creates a horizontal, non-looping configuration with no gap.
    #[must_use]
    pub fn new(item_extent: S) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            item_extent,
            gap: S::zero(),
            looping: false,
        }
    }

    /// Returns this configuration with the given orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns this configuration with the given inter-item gap.
    #[must_use]
    pub fn with_gap(mut self, gap: S) -> Self {
        self.gap = gap;
        self
    }

    /// Returns this configuration with looping enabled or disabled.
    #[must_use]
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Item extent plus gap: the distance between the starts of two
    /// consecutive items.
    #[must_use]
    pub fn effective_item_extent(&self) -> S {
        self.item_extent + self.gap
    }

    /// Returns `true` when no window can be computed for this configuration.
    ///
    /// That is the case when the effective item extent is not a finite,
    /// strictly positive number.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.effective_item_extent().is_positive_finite()
    }

    /// Size of one full pass through `len` items.
    ///
    /// Returns zero for degenerate configurations.
    #[must_use]
    pub fn loop_extent(&self, len: usize) -> S {
        if self.is_degenerate() {
            return S::zero();
        }
        S::from_usize(len) * self.effective_item_extent()
    }
}
