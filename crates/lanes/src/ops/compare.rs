//! Lane-wise comparisons and selection
//!
//! Comparisons produce a mask. Any comparison with a NaN lane is false,
//! except `ne`.

use crate::traits::SimdVector;

/// `a[i] == b[i]`
#[inline(always)]
pub fn eq<V: SimdVector>(a: V, b: V) -> V::Mask {
    a.eq(b)
}

/// `a[i] != b[i]`
#[inline(always)]
pub fn ne<V: SimdVector>(a: V, b: V) -> V::Mask {
    a.ne(b)
}

/// `a[i] < b[i]`
///
/// # Example
///
/// ```rust
/// use lanes::{i32x4, SimdVector};
/// use lanes::ops::lt;
///
/// let a = i32x4::from_array([-1, 0, 1, 2]);
/// let m = lt(a, i32x4::splat(1));
/// assert_eq!(m.to_array(), [true, true, false, false]);
/// ```
#[inline(always)]
pub fn lt<V: SimdVector>(a: V, b: V) -> V::Mask {
    a.lt(b)
}

/// `a[i] <= b[i]`
#[inline(always)]
pub fn le<V: SimdVector>(a: V, b: V) -> V::Mask {
    a.le(b)
}

/// `a[i] > b[i]`
#[inline(always)]
pub fn gt<V: SimdVector>(a: V, b: V) -> V::Mask {
    a.gt(b)
}

/// `a[i] >= b[i]`
#[inline(always)]
pub fn ge<V: SimdVector>(a: V, b: V) -> V::Mask {
    a.ge(b)
}

/// `mask[i] ? if_true[i] : if_false[i]`
///
/// # Example
///
/// ```rust
/// use lanes::{f32x4, SimdVector};
/// use lanes::ops::{gt, select};
///
/// let x = f32x4::from_array([-2.0, -1.0, 1.0, 2.0]);
/// let zero = f32x4::zero();
/// // Half-wave rectify
/// let y = select(gt(x, zero), x, zero);
/// assert_eq!(y.to_array(), [0.0, 0.0, 1.0, 2.0]);
/// ```
#[inline(always)]
pub fn select<V: SimdVector>(mask: V::Mask, if_true: V, if_false: V) -> V {
    V::select(mask, if_true, if_false)
}
