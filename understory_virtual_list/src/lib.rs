// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_virtual_list --heading-base-level=0

//! Understory Virtual List: fixed-extent 1D windowing with optional looping.
//!
//! This crate provides the pure math behind a virtualized strip of uniformly
//! sized items: given a scroll position it decides which items to realize and
//! where to place them, so that render work is proportional to the viewport
//! rather than to the collection.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for extents,
//!   offsets, and scroll positions.
//! - [`AxisConfig`]: orientation, item extent, gap, and whether the strip
//!   loops around at both ends.
//! - [`compute_window`]: turns a logical scroll offset and a viewport extent
//!   into a [`WindowSpan`], the run of logical indices to realize (with
//!   symmetric overscan). [`WindowSpan::resolve`] pairs each slot with its
//!   item, wrapping negative or out-of-range indices when looping.
//! - [`compute_track_geometry`]: turns the window start into a
//!   [`TrackGeometry`], the translation for the realized strip plus the full
//!   scrollable extent of the track.
//!
//! This crate deliberately does **not** own any scroll state. Keeping a
//! looping scroll position inside the duplicated track, throttling scroll
//! notifications, and talking to a real scrollable surface live in
//! `understory_scroll_loop`.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_virtual_list::{AxisConfig, compute_track_geometry, compute_window};
//!
//! let items: Vec<u32> = (0..10).collect();
//! let config = AxisConfig::new(100.0_f64);
//!
//! // Viewport 250px wide, scrolled 305px, two items of overscan per side.
//! let span = compute_window(305.0, 250.0, &config, items.len(), 2);
//! let window = span.resolve(&items);
//! let shown: Vec<u32> = window.iter().map(|entry| *entry.item).collect();
//! assert_eq!(shown, [1, 2, 3, 4, 5, 6, 7]);
//!
//! let geometry = compute_track_geometry(span.start_index, &config, items.len());
//! assert_eq!(geometry.track_offset, 100.0);
//! assert_eq!(geometry.total_extent, 1000.0);
//! ```
//!
//! ## Looping
//!
//! With [`AxisConfig::looping`] set, the track is three loop extents long and
//! the window may start at a negative index. Every slot still maps to a real
//! item:
//!
//! ```rust
//! use understory_virtual_list::{AxisConfig, compute_window};
//!
//! let items = ["a", "b", "c", "d"];
//! let config = AxisConfig::new(10.0_f32).with_looping(true);
//!
//! let span = compute_window(0.0, 20.0, &config, items.len(), 1);
//! let window = span.resolve(&items);
//! let shown: Vec<(isize, &str)> = window
//!     .iter()
//!     .map(|entry| (entry.logical_index, *entry.item))
//!     .collect();
//! assert_eq!(shown, [(-1, "d"), (0, "a"), (1, "b"), (2, "c")]);
//! ```
//!
//! All computations are total: an empty collection, a non-positive effective
//! item extent, or non-finite offsets produce an empty window and zeroed
//! geometry instead of panicking or dividing by zero.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod geometry;
mod scalar;
mod window;

pub use axis::{Axis, AxisConfig, DEFAULT_OVERSCAN, Orientation};
pub use geometry::{TrackGeometry, compute_track_geometry};
pub use scalar::Scalar;
pub use window::{
    VisibleWindow, WindowEntry, WindowIndices, WindowSpan, compute_window, wrap_index,
};
