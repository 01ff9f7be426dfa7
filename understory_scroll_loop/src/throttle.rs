// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based throttling with trailing-edge delivery.
//!
//! Scroll notifications can arrive far more often than a window needs to be
//! recomputed. [`Throttle`] lets the first call of a burst through, swallows
//! the rest of the burst, and then delivers one trailing call once the
//! interval has passed, so the final settled position is always processed.
//!
//! Time is passed in by the host as a [`Duration`] since any fixed epoch,
//! which keeps the throttle free of clocks and timers:
//!
//! ```rust
//! use core::time::Duration;
//! use understory_scroll_loop::Throttle;
//!
//! let mut throttle = Throttle::new(Duration::from_millis(10));
//! let ms = Duration::from_millis;
//!
//! assert!(throttle.submit(ms(0)));   // leading edge runs now
//! assert!(!throttle.submit(ms(3)));  // swallowed
//! assert!(!throttle.submit(ms(6)));  // swallowed, still pending
//! assert_eq!(throttle.next_deadline(), Some(ms(10)));
//!
//! assert!(!throttle.poll(ms(9)));
//! assert!(throttle.poll(ms(10)));    // trailing edge runs once
//! assert!(!throttle.poll(ms(30)));
//! ```

use core::time::Duration;

/// Interval used when the host does not pick one.
pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_millis(10);

/// Leading- and trailing-edge throttle driven by host time.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    window_end: Option<Duration>,
    pending: bool,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_INTERVAL)
    }
}

impl Throttle {
    /// Creates a throttle that runs at most once per `interval`.
    ///
    /// A zero interval lets every call through.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_end: None,
            pending: false,
        }
    }

    /// Returns the configured interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sets the interval. Takes effect from the next window.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Registers a call at `now`.
    ///
    /// Returns `true` if the caller should run the work immediately. Otherwise
    /// the call is remembered and delivered later by [`Throttle::poll`].
    pub fn submit(&mut self, now: Duration) -> bool {
        match self.window_end {
            Some(end) if now < end => {
                self.pending = true;
                false
            }
            _ => {
                self.open_window(now);
                true
            }
        }
    }

    /// Checks for a due trailing call at `now`.
    ///
    /// Returns `true` exactly once per swallowed burst, no earlier than the
    /// end of the window the burst fell into.
    pub fn poll(&mut self, now: Duration) -> bool {
        let Some(end) = self.window_end else {
            return false;
        };
        if now < end {
            return false;
        }
        if self.pending {
            self.open_window(now);
            true
        } else {
            self.window_end = None;
            false
        }
    }

    /// When the host should call [`Throttle::poll`] next, if anything is
    /// pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        if self.pending { self.window_end } else { None }
    }

    /// Returns `true` while a trailing call is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Drops any pending call and closes the current window.
    pub fn cancel(&mut self) {
        self.pending = false;
        self.window_end = None;
    }

    fn open_window(&mut self, now: Duration) {
        self.pending = false;
        self.window_end = Some(now.saturating_add(self.interval));
    }
}
