// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window calculation: which items must be realized for a scroll offset.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::{AxisConfig, Scalar};

/// Contiguous run of logical indices that should be realized.
///
/// A span is a plain value: it records the first logical index, how many
/// slots follow it, and enough about the collection (`len`, `looping`) to map
/// each slot back to a data index. It does not borrow the collection, so it
/// can be cached, compared, and diffed by hosts.
///
/// In looping mode `start_index` may be negative and slots may run past
/// `len`; each slot still maps to a valid data index through a sign-safe
/// modulo. In non-looping mode every slot is in `0..len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowSpan {
    /// Logical index of the first slot. Never negative unless `looping`.
    pub start_index: isize,
    /// Number of slots in the window.
    pub count: usize,
    /// Collection length the span was computed against.
    pub len: usize,
    /// Whether slots wrap around the collection.
    pub looping: bool,
}

impl WindowSpan {
    /// An empty span for a collection of `len` items.
    #[must_use]
    pub const fn empty(len: usize, looping: bool) -> Self {
        Self {
            start_index: 0,
            count: 0,
            len,
            looping,
        }
    }

    /// Returns `true` if the window realizes no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterates `(logical_index, data_index)` pairs in window order.
    #[must_use]
    pub fn indices(&self) -> WindowIndices {
        WindowIndices {
            next: self.start_index,
            remaining: if self.len == 0 { 0 } else { self.count },
            len: self.len,
        }
    }

    /// Pairs each slot of the window with the item it shows.
    ///
    /// `items` must be the collection the span was computed for. A slice of
    /// a different length means the collection changed after the span was
    /// computed; the result is then empty rather than indexing stale slots.
    #[must_use]
    pub fn resolve<'a, T>(&self, items: &'a [T]) -> VisibleWindow<'a, T> {
        if items.len() != self.len {
            return VisibleWindow {
                start_index: self.start_index,
                entries: Vec::new(),
            };
        }
        let entries = self
            .indices()
            .map(|(logical_index, data_index)| WindowEntry {
                logical_index,
                data_index,
                item: &items[data_index],
            })
            .collect();
        VisibleWindow {
            start_index: self.start_index,
            entries,
        }
    }
}

/// Iterator over the `(logical_index, data_index)` pairs of a [`WindowSpan`].
#[derive(Clone, Debug)]
pub struct WindowIndices {
    next: isize,
    remaining: usize,
    len: usize,
}

impl Iterator for WindowIndices {
    type Item = (isize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let logical = self.next;
        let data = wrap_index(logical, self.len)?;
        self.remaining -= 1;
        self.next = self.next.saturating_add(1);
        Some((logical, data))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WindowIndices {}

impl FusedIterator for WindowIndices {}

/// A single realized slot: its logical position and the item it shows.
#[derive(Debug)]
pub struct WindowEntry<'a, T> {
    /// Position of the slot along the track, in items. May be negative or
    /// `>= len` while looping.
    pub logical_index: isize,
    /// Index into the collection, always in `0..len`.
    pub data_index: usize,
    /// The item shown in this slot.
    pub item: &'a T,
}

impl<T> Clone for WindowEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for WindowEntry<'_, T> {}

/// The items of a [`WindowSpan`], resolved against a collection.
#[derive(Clone, Debug)]
pub struct VisibleWindow<'a, T> {
    start_index: isize,
    entries: Vec<WindowEntry<'a, T>>,
}

impl<'a, T> VisibleWindow<'a, T> {
    /// Logical index of the first slot.
    #[must_use]
    pub fn start_index(&self) -> isize {
        self.start_index
    }

    /// Number of realized slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing needs to be realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The realized slots in order.
    #[must_use]
    pub fn entries(&self) -> &[WindowEntry<'a, T>] {
        &self.entries
    }

    /// Iterates the realized slots in order.
    pub fn iter(&self) -> core::slice::Iter<'_, WindowEntry<'a, T>> {
        self.entries.iter()
    }
}

impl<'w, 'a, T> IntoIterator for &'w VisibleWindow<'a, T> {
    type Item = &'w WindowEntry<'a, T>;
    type IntoIter = core::slice::Iter<'w, WindowEntry<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Maps a possibly negative logical index onto `0..len`.
///
/// This is the mathematical modulo, so `-1` maps to `len - 1`. Returns
/// `None` when `len` is zero.
#[must_use]
pub fn wrap_index(logical: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let Ok(modulus) = isize::try_from(len) else {
        // Slices never exceed `isize::MAX` elements, and neither can any
        // logical index, so it is already in range.
        return usize::try_from(logical).ok();
    };
    usize::try_from(logical.rem_euclid(modulus)).ok()
}

/// Computes the window of items to realize for a scroll position.
///
/// - `logical_offset`: stable scroll offset along the track (see the loop
///   normalizer in `understory_scroll_loop`).
/// - `container_extent`: size of the viewport along the scroll axis.
/// - `config`: item extent, gap, and looping.
/// - `len`: number of items in the collection.
/// - `overscan`: extra slots realized on each side of the visible range.
///
/// The first visible slot is `floor(offset / effective_item_extent)`
/// (clamped at zero) and the window spans
/// `ceil(container_extent / effective_item_extent) + 2 * overscan` slots,
/// starting `overscan` slots earlier. Without looping the start is clamped
/// at zero and the end at `len`; with looping the start may go negative and
/// the count is capped at `3 * len + 1 + 2 * overscan`, the most a viewport
/// onto the three-copy track can show.
///
/// A zero container extent yields the overscan-only window. Degenerate
/// inputs (empty collection, non-positive effective extent, non-finite
/// offset, negative or non-finite container extent) produce an empty span.
#[must_use]
pub fn compute_window<S: Scalar>(
    logical_offset: S,
    container_extent: S,
    config: &AxisConfig<S>,
    len: usize,
    overscan: usize,
) -> WindowSpan {
    let looping = config.looping;
    if len == 0
        || config.is_degenerate()
        || !logical_offset.is_finite()
        || !container_extent.is_finite()
        || container_extent < S::zero()
    {
        return WindowSpan::empty(len, looping);
    }

    let stride = config.effective_item_extent();
    let first_visible = (logical_offset / stride).floor_to_isize().max(0);
    let overscan_signed = isize::try_from(overscan).unwrap_or(isize::MAX);
    let unclamped_start = first_visible.saturating_sub(overscan_signed);
    let visible_count = (container_extent / stride)
        .ceil_to_usize()
        .saturating_add(overscan.saturating_mul(2));

    if looping {
        // The looping track is three loop extents long, so no viewport onto
        // it shows more than `3 * len + 1` slots. Logical indices must also
        // stay representable.
        let track_slots = len
            .saturating_mul(3)
            .saturating_add(1)
            .saturating_add(overscan.saturating_mul(2));
        let representable = isize::MAX.abs_diff(unclamped_start).saturating_add(1);
        return WindowSpan {
            start_index: unclamped_start,
            count: visible_count.min(track_slots).min(representable),
            len,
            looping,
        };
    }

    let start_index = unclamped_start.max(0);
    let start = usize::try_from(start_index).unwrap_or(0);
    let end = start.saturating_add(visible_count).min(len);
    WindowSpan {
        start_index,
        count: end.saturating_sub(start),
        len,
        looping,
    }
}
