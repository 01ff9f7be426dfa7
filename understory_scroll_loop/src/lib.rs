// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll_loop --heading-base-level=0

//! Understory Scroll Loop: loop-stable scroll tracking over a host surface.
//!
//! `understory_virtual_list` turns a scroll offset into a window of items.
//! This crate supplies that offset from a real scrollable surface and keeps it
//! stable when the strip loops forever in both directions.
//!
//! The pieces are:
//!
//! - [`ScrollPort`]: the narrow interface a host implements for its scroll
//!   surface (read offset and extent, write a corrective offset, subscribe to
//!   scroll and resize notifications). [`MemoryScrollPort`] is an in-memory
//!   implementation for tests and headless hosts.
//! - [`LoopNormalizer`]: keeps a looping surface inside the middle copy of a
//!   triplicated track by rewriting its offset one loop extent at a time,
//!   producing a logical offset with no visible jump.
//! - [`Throttle`]: host-time throttling with trailing-edge delivery, so bursts
//!   of scroll notifications cost one recomputation per interval and the
//!   settled position is always processed.
//! - [`PresentedSet`]: keys of items that have been fully presented before,
//!   owned by the presentation layer.
//! - [`LoopSession`]: wires the above together for the lifetime of one mount
//!   and produces a [`Frame`] (window, strip translation, track extent) on
//!   demand. Dropping the session removes its subscriptions.
//!
//! ## Event flow
//!
//! ```text
//! host surface ── PortEvent ──► LoopSession::handle ──► Throttle
//!                                                         │
//!                     ScrollPort ◄── correction ── LoopNormalizer
//!                                                         │
//!            LoopSession::frame ──► compute_window + compute_track_geometry
//! ```
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_scroll_loop::{LoopSession, MemoryScrollPort};
//! use understory_virtual_list::AxisConfig;
//!
//! let photos = ["a", "b", "c", "d", "e"];
//! let config = AxisConfig::new(300.0).with_gap(10.0).with_looping(true);
//! let mut session = LoopSession::new(MemoryScrollPort::new(700.0), config, photos.len());
//!
//! // Looping sessions start at the beginning of the primary copy.
//! assert_eq!(session.logical_offset(), 5.0 * 310.0);
//!
//! if let Some(event) = session.port_mut().scroll_by(400.0) {
//!     session.handle(event, Duration::ZERO);
//! }
//!
//! let frame = session.frame(&photos);
//! for entry in &frame.window {
//!     // Render `entry.item` at slot `entry.logical_index`.
//!     let _ = (entry.logical_index, entry.item);
//! }
//! assert_eq!(frame.geometry.total_extent, 3.0 * 5.0 * 310.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to dependencies.
//! - `libm`: lets Kurbo compile without `std`.
//! - `tracing`: emits `tracing` events for loop corrections and frame builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod normalizer;
mod port;
mod presented;
mod session;
mod throttle;

pub use normalizer::{Correction, LoopNormalizer};
pub use port::{MemoryScrollPort, PortEvent, PortEventKind, ScrollPort, SubscriptionId};
pub use presented::PresentedSet;
pub use session::{Frame, LoopSession};
pub use throttle::{DEFAULT_THROTTLE_INTERVAL, Throttle};
