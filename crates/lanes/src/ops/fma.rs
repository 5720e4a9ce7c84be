//! Fused and compound arithmetic
//!
//! The generic engine evaluates each of these as two rounded operations.
//! Integer lanes wrap at both steps.

use crate::traits::SimdVector;

/// `a * b + c`
///
/// # Example
///
/// ```rust
/// use lanes::{f32x4, SimdVector};
/// use lanes::ops::mul_add;
///
/// let a = f32x4::splat(2.0);
/// let b = f32x4::splat(3.0);
/// let c = f32x4::splat(1.0);
/// // 2 * 3 + 1
/// assert_eq!(mul_add(a, b, c).to_array(), [7.0; 4]);
/// ```
#[inline(always)]
pub fn mul_add<V: SimdVector>(a: V, b: V, c: V) -> V {
    a.mul_add(b, c)
}

/// `a * b - c`
///
/// # Example
///
/// ```rust
/// use lanes::{i32x4, SimdVector};
/// use lanes::ops::mul_sub;
///
/// let a = i32x4::splat(2);
/// let b = i32x4::splat(3);
/// let c = i32x4::splat(10);
/// assert_eq!(mul_sub(a, b, c).to_array(), [-4; 4]);
/// ```
#[inline(always)]
pub fn mul_sub<V: SimdVector>(a: V, b: V, c: V) -> V {
    a.mul_sub(b, c)
}

/// `(a + b) * c`
///
/// # Example
///
/// ```rust
/// use lanes::{i32x4, SimdVector};
/// use lanes::ops::add_mul;
///
/// let a = i32x4::splat(3);
/// let b = i32x4::splat(4);
/// let c = i32x4::from_array([0, 1, 2, -1]);
/// assert_eq!(add_mul(a, b, c).to_array(), [0, 7, 14, -7]);
/// ```
#[inline(always)]
pub fn add_mul<V: SimdVector>(a: V, b: V, c: V) -> V {
    a.add_mul(b, c)
}

/// `(a - b) * c`
#[inline(always)]
pub fn sub_mul<V: SimdVector>(a: V, b: V, c: V) -> V {
    a.sub_mul(b, c)
}

/// Linear interpolation `a + (b - a) * t`
///
/// # Example
///
/// ```rust
/// use lanes::{f32x2, SimdVector};
/// use lanes::ops::lerp;
///
/// let a = f32x2::splat(0.0);
/// let b = f32x2::splat(10.0);
/// let t = f32x2::from_array([0.25, 1.0]);
/// assert_eq!(lerp(a, b, t).to_array(), [2.5, 10.0]);
/// ```
#[inline(always)]
pub fn lerp<V: SimdVector>(a: V, b: V, t: V) -> V {
    b.sub(a).mul_add(t, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{f64x4, u16x8, u8x4};

    #[test]
    fn test_mul_add() {
        let a = f64x4::from_array([1.0, 2.0, 3.0, 4.0]);
        let b = f64x4::splat(2.0);
        let c = f64x4::splat(0.5);
        assert_eq!(mul_add(a, b, c).to_array(), [2.5, 4.5, 6.5, 8.5]);
    }

    #[test]
    fn test_mul_sub() {
        let a = f64x4::splat(3.0);
        let b = f64x4::splat(3.0);
        let c = f64x4::from_array([0.0, 1.0, 9.0, 10.0]);
        assert_eq!(mul_sub(a, b, c).to_array(), [9.0, 8.0, 0.0, -1.0]);
    }

    #[test]
    fn test_add_mul_sub_mul() {
        let a = u16x8::splat(100);
        let b = u16x8::splat(3);
        let c = u16x8::from_array([0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(add_mul(a, b, c).to_array(), [0, 103, 206, 309, 412, 515, 618, 721]);
        assert_eq!(sub_mul(a, b, c).to_array(), [0, 97, 194, 291, 388, 485, 582, 679]);
    }

    #[test]
    fn test_wraps_at_each_step() {
        // 16 * 16 wraps to 0 in u8, then + 5
        let a = u8x4::splat(16);
        assert_eq!(mul_add(a, a, u8x4::splat(5)).to_array(), [5; 4]);
        // 1 - 16 wraps to 241, then 241 * 16 wraps to 16
        assert_eq!(sub_mul(u8x4::splat(1), a, a).to_array(), [16; 4]);
        // 250 + 16 wraps to 10
        assert_eq!(add_mul(u8x4::splat(250), a, u8x4::splat(2)).to_array(), [20; 4]);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = f64x4::splat(-1.0);
        let b = f64x4::splat(3.0);
        let t = f64x4::from_array([0.0, 0.5, 0.75, 1.0]);
        assert_eq!(lerp(a, b, t).to_array(), [-1.0, 1.0, 2.0, 3.0]);
    }
}
