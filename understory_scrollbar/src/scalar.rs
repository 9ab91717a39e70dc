// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction for pixel extents and offsets.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// A floating-point scalar used for viewport heights, item sizes, and thumb geometry.
///
/// Implemented for `f32` and `f64`. Hosts pick whichever matches their layout engine;
/// every quantity handed to one calculator must use the same type.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Converts an item count or index into this scalar type.
    fn from_usize(value: usize) -> Self;

    /// Widens to `f64`, the coordinate type used by [`kurbo`].
    fn to_f64(self) -> f64;

    /// Returns `true` if this value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Returns `true` if the sign bit is set (including `-0.0` and negative NaNs).
    fn is_sign_negative(self) -> bool;

    /// Returns the larger of two values, preferring the non-NaN operand.
    #[must_use]
    fn max(self, other: Self) -> Self;

    /// Returns the smaller of two values, preferring the non-NaN operand.
    #[must_use]
    fn min(self, other: Self) -> Self;
}

macro_rules! impl_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            #[allow(
                clippy::cast_precision_loss,
                reason = "Item counts beyond the mantissa are far outside any realistic list"
            )]
            fn from_usize(value: usize) -> Self {
                value as Self
            }

            #[inline]
            #[allow(
                trivial_numeric_casts,
                reason = "The macro covers both f32 and f64; the f64 cast is a no-op"
            )]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                <$t>::is_sign_negative(self)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                <$t>::max(self, other)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                <$t>::min(self, other)
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
