//! Elementwise arithmetic
//!
//! Integer lanes wrap. Integer division by zero panics.

use crate::traits::{SimdSigned, SimdVector};

/// Add two vectors lane by lane
///
/// # Example
///
/// ```rust
/// use lanes::{u8x4, SimdVector};
/// use lanes::ops::add;
///
/// let a = u8x4::from_array([250, 1, 2, 3]);
/// let b = u8x4::splat(10);
/// assert_eq!(add(a, b).to_array(), [4, 11, 12, 13]);
/// ```
#[inline(always)]
pub fn add<V: SimdVector>(a: V, b: V) -> V {
    a.add(b)
}

/// Subtract two vectors lane by lane
///
/// # Example
///
/// ```rust
/// use lanes::{i32x4, SimdVector};
/// use lanes::ops::sub;
///
/// let a = i32x4::splat(5);
/// let b = i32x4::from_array([1, 2, 3, 4]);
/// assert_eq!(sub(a, b).to_array(), [4, 3, 2, 1]);
/// ```
#[inline(always)]
pub fn sub<V: SimdVector>(a: V, b: V) -> V {
    a.sub(b)
}

/// Multiply two vectors lane by lane
///
/// # Example
///
/// ```rust
/// use lanes::{f32x4, SimdVector};
/// use lanes::ops::mul;
///
/// let a = f32x4::splat(2.0);
/// let b = f32x4::splat(3.0);
/// assert_eq!(mul(a, b).horizontal_sum(), 24.0);
/// ```
#[inline(always)]
pub fn mul<V: SimdVector>(a: V, b: V) -> V {
    a.mul(b)
}

/// Divide two vectors lane by lane
///
/// # Panics
///
/// Panics if an integer lane of `b` is zero
///
/// # Example
///
/// ```rust
/// use lanes::{f64x2, SimdVector};
/// use lanes::ops::div;
///
/// let a = f64x2::splat(6.0);
/// let b = f64x2::from_array([3.0, 0.0]);
/// assert_eq!(div(a, b).to_array(), [2.0, f64::INFINITY]);
/// ```
#[inline(always)]
pub fn div<V: SimdVector>(a: V, b: V) -> V {
    a.div(b)
}

/// Lane-wise minimum
#[inline(always)]
pub fn min<V: SimdVector>(a: V, b: V) -> V {
    a.min(b)
}

/// Lane-wise maximum
#[inline(always)]
pub fn max<V: SimdVector>(a: V, b: V) -> V {
    a.max(b)
}

/// Clamp every lane to `[lo, hi]`
///
/// # Example
///
/// ```rust
/// use lanes::{i16x4, SimdVector};
/// use lanes::ops::clamp;
///
/// let v = i16x4::from_array([-300, -5, 5, 300]);
/// let c = clamp(v, i16x4::splat(-10), i16x4::splat(10));
/// assert_eq!(c.to_array(), [-10, -5, 5, 10]);
/// ```
#[inline(always)]
pub fn clamp<V: SimdVector>(v: V, lo: V, hi: V) -> V {
    v.max(lo).min(hi)
}

/// Negate every lane
///
/// # Example
///
/// ```rust
/// use lanes::{f32x4, SimdVector};
/// use lanes::ops::neg;
///
/// let a = f32x4::splat(2.0);
/// assert_eq!(neg(a).horizontal_sum(), -8.0);
/// ```
#[inline(always)]
pub fn neg<V: SimdSigned>(a: V) -> V {
    a.neg()
}

/// Absolute value of every lane (integer `MIN` stays `MIN`)
#[inline(always)]
pub fn abs<V: SimdSigned>(a: V) -> V {
    a.abs()
}
