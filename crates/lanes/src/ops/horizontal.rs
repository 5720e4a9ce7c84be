//! Horizontal reductions
//!
//! Provides operations that reduce a vector to a single scalar by combining
//! all lanes. The masked forms fold only the selected lanes and return the
//! operation's identity when none are selected.

use crate::traits::{SimdInteger, SimdVector};

/// Horizontal sum: add all lanes together
///
/// Integer lanes wrap.
///
/// # Example
///
/// ```rust
/// use lanes::{f32x8, SimdVector};
/// use lanes::ops::horizontal_sum;
///
/// let a = f32x8::splat(2.0);
/// assert_eq!(horizontal_sum(a), 16.0);
/// ```
#[inline(always)]
pub fn horizontal_sum<V: SimdVector>(a: V) -> V::Scalar {
    a.horizontal_sum()
}

/// Horizontal product: multiply all lanes together
#[inline(always)]
pub fn horizontal_product<V: SimdVector>(a: V) -> V::Scalar {
    a.horizontal_product()
}

/// Horizontal maximum: find the largest lane
///
/// # Example
///
/// ```rust
/// use lanes::{i16x4, SimdVector};
/// use lanes::ops::horizontal_max;
///
/// let a = i16x4::from_array([3, -7, 12, 0]);
/// assert_eq!(horizontal_max(a), 12);
/// ```
#[inline(always)]
pub fn horizontal_max<V: SimdVector>(a: V) -> V::Scalar {
    a.horizontal_max()
}

/// Horizontal minimum: find the smallest lane
#[inline(always)]
pub fn horizontal_min<V: SimdVector>(a: V) -> V::Scalar {
    a.horizontal_min()
}

/// Sum of the selected lanes, zero if none are selected
///
/// # Example
///
/// ```rust
/// use lanes::{u32x4, Mask, SimdVector};
/// use lanes::ops::horizontal_sum_masked;
///
/// let a = u32x4::from_array([1, 2, 3, 4]);
/// let m = Mask::from_array([true, false, false, true]);
/// assert_eq!(horizontal_sum_masked(a, m), 5);
/// assert_eq!(horizontal_sum_masked(a, Mask::splat(false)), 0);
/// ```
#[inline(always)]
pub fn horizontal_sum_masked<V: SimdVector>(a: V, mask: V::Mask) -> V::Scalar {
    a.horizontal_sum_masked(mask)
}

/// Product of the selected lanes, one if none are selected
#[inline(always)]
pub fn horizontal_product_masked<V: SimdVector>(a: V, mask: V::Mask) -> V::Scalar {
    a.horizontal_product_masked(mask)
}

/// Smallest selected lane, the type's largest value if none are selected
#[inline(always)]
pub fn horizontal_min_masked<V: SimdVector>(a: V, mask: V::Mask) -> V::Scalar {
    a.horizontal_min_masked(mask)
}

/// Largest selected lane, the type's smallest value if none are selected
#[inline(always)]
pub fn horizontal_max_masked<V: SimdVector>(a: V, mask: V::Mask) -> V::Scalar {
    a.horizontal_max_masked(mask)
}

/// Bitwise AND of all lanes
#[inline(always)]
pub fn horizontal_and<V: SimdInteger>(a: V) -> V::Scalar {
    a.horizontal_and()
}

/// Bitwise OR of all lanes
///
/// # Example
///
/// ```rust
/// use lanes::{u8x4, SimdVector};
/// use lanes::ops::horizontal_or;
///
/// let a = u8x4::from_array([0b0001, 0b0010, 0b0100, 0b0001]);
/// assert_eq!(horizontal_or(a), 0b0111);
/// ```
#[inline(always)]
pub fn horizontal_or<V: SimdInteger>(a: V) -> V::Scalar {
    a.horizontal_or()
}

/// Bitwise XOR of all lanes
#[inline(always)]
pub fn horizontal_xor<V: SimdInteger>(a: V) -> V::Scalar {
    a.horizontal_xor()
}

/// Dot product: `sum(a[i] * b[i])`
///
/// # Example
///
/// ```rust
/// use lanes::{f64x4, SimdVector};
/// use lanes::ops::dot;
///
/// let a = f64x4::from_array([1.0, 2.0, 3.0, 4.0]);
/// let b = f64x4::splat(0.5);
/// assert_eq!(dot(a, b), 5.0);
/// ```
#[inline(always)]
pub fn dot<V: SimdVector>(a: V, b: V) -> V::Scalar {
    a.mul(b).horizontal_sum()
}
