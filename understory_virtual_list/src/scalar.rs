// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used for extents, offsets, and scroll positions.
//!
//! This trait is intentionally small and only implemented for `f32` and `f64`.
//! Rounding goes through `libm` so the crate stays `no_std`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for extents, offsets, and scroll positions.
///
/// This is currently implemented for `f32` and `f64`. The trait is deliberately
/// minimal and geared toward floating-point coordinates.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns the maximum of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Constructs from an `isize` lossily, keeping the sign.
    fn from_isize(value: isize) -> Self;

    /// Floors the value and converts it to `isize`.
    ///
    /// Values outside the `isize` range saturate; NaN maps to `0`.
    fn floor_to_isize(self) -> isize;

    /// Ceils the value and converts it to `usize`.
    ///
    /// Negative values and NaN map to `0`; values past `usize::MAX` saturate.
    fn ceil_to_usize(self) -> usize;

    /// Returns `true` for finite values strictly greater than zero.
    fn is_positive_finite(self) -> bool {
        self.is_finite() && self > Self::zero()
    }
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn from_isize(value: isize) -> Self {
        value as Self
    }

    fn floor_to_isize(self) -> isize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Float to int casts saturate; callers clamp the index afterwards"
        )]
        {
            libm::floorf(self) as isize
        }
    }

    fn ceil_to_usize(self) -> usize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Float to int casts saturate and negative values map to zero"
        )]
        {
            libm::ceilf(self) as usize
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn from_isize(value: isize) -> Self {
        value as Self
    }

    fn floor_to_isize(self) -> isize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Float to int casts saturate; callers clamp the index afterwards"
        )]
        {
            libm::floor(self) as isize
        }
    }

    fn ceil_to_usize(self) -> usize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Float to int casts saturate and negative values map to zero"
        )]
        {
            libm::ceil(self) as usize
        }
    }
}
