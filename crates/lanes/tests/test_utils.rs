//! Test utilities for lanes
//!
//! Provides reference implementations, proptest strategies, and lane
//! assertion helpers shared by the integration tests.

#![allow(dead_code)]

use core::fmt::Debug;

use proptest::prelude::*;

// ============================================================================
// Reference Implementations
// ============================================================================

/// Apply `f` lane by lane, the scalar loop every vector op must agree with
pub fn ref_zip<T: Copy, R: Copy + Default, const N: usize>(
    a: &[T; N],
    b: &[T; N],
    f: impl Fn(T, T) -> R,
) -> [R; N] {
    let mut out = [R::default(); N];
    for i in 0..N {
        out[i] = f(a[i], b[i]);
    }
    out
}

/// Masked reference: `mask[i] ? f(a[i], b[i]) : a[i]`
pub fn ref_masked<T: Copy, const N: usize>(
    mask: &[bool; N],
    a: &[T; N],
    b: &[T; N],
    f: impl Fn(T, T) -> T,
) -> [T; N] {
    let mut out = *a;
    for i in 0..N {
        if mask[i] {
            out[i] = f(a[i], b[i]);
        }
    }
    out
}

/// Scalar dot product in lane order
pub fn ref_dot_f32(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).fold(0.0, |acc, (x, y)| acc + x * y)
}

/// Escape-time count of one Mandelbrot point, the per-lane kernel the
/// `any()` loop must reproduce
pub fn ref_mandelbrot(cr: f32, ci: f32, max_iter: u32) -> u32 {
    let (mut zr, mut zi) = (0.0f32, 0.0f32);
    let mut count = 0;
    while count < max_iter && zr * zr + zi * zi <= 4.0 {
        let next = zr * zr - zi * zi + cr;
        zi = 2.0 * zr * zi + ci;
        zr = next;
        count += 1;
    }
    count
}

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Strategy for an array of `N` arbitrary lanes
pub fn lanes_of<T, const N: usize>() -> impl Strategy<Value = [T; N]>
where
    T: Arbitrary + Copy + Default + Debug,
{
    proptest::collection::vec(any::<T>(), N).prop_map(|v| {
        let mut out = [T::default(); N];
        out.copy_from_slice(&v);
        out
    })
}

/// Strategy for an array of `N` lanes drawn from `element`
pub fn lanes_from<T, S, const N: usize>(element: S) -> impl Strategy<Value = [T; N]>
where
    T: Copy + Default + Debug,
    S: Strategy<Value = T>,
{
    proptest::collection::vec(element, N).prop_map(|v| {
        let mut out = [T::default(); N];
        out.copy_from_slice(&v);
        out
    })
}

/// Strategy for a mask of `N` lanes
pub fn mask_of<const N: usize>() -> impl Strategy<Value = [bool; N]> {
    lanes_of::<bool, N>()
}

/// Finite floats of moderate magnitude
///
/// Keeps products and sums away from overflow so exact comparisons hold.
pub fn normal_f32() -> impl Strategy<Value = f32> {
    (-1000.0f32..=1000.0f32).prop_filter("not denormal", |&x| x.is_normal() || x == 0.0)
}

/// Finite doubles of moderate magnitude
pub fn normal_f64() -> impl Strategy<Value = f64> {
    (-1.0e6f64..=1.0e6f64).prop_filter("not denormal", |&x| x.is_normal() || x == 0.0)
}

/// Any float, including NaN, infinities, zeros and subnormals
pub fn any_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        normal_f32(),
        Just(0.0f32),
        Just(-0.0f32),
        Just(f32::MIN_POSITIVE / 2.0),
        Just(f32::MAX),
        Just(f32::NAN),
        Just(f32::INFINITY),
        Just(f32::NEG_INFINITY),
    ]
}

/// `N` distinct indices below `len`, in random order
pub fn distinct_indices<const N: usize>(len: u32) -> impl Strategy<Value = [u32; N]> {
    assert!(len as usize >= N, "need at least {} slots, got {}", N, len);
    proptest::sample::subsequence((0..len).collect::<Vec<_>>(), N)
        .prop_shuffle()
        .prop_map(|v| {
            let mut out = [0u32; N];
            out.copy_from_slice(&v);
            out
        })
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Float equality that treats every NaN as equal to every other NaN
pub fn same_f32(a: f32, b: f32) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

/// Lane-wise [`same_f32`]
pub fn assert_same_f32<const N: usize>(actual: &[f32; N], expected: &[f32; N], context: &str) {
    for i in 0..N {
        assert!(
            same_f32(actual[i], expected[i]),
            "{}: lane {} differs. Expected: {:?}, Actual: {:?}",
            context,
            i,
            expected[i],
            actual[i]
        );
    }
}

/// Assert the pass-through contract of a masked op
///
/// Selected lanes must match the unmasked result, unselected lanes must
/// match the original receiver.
pub fn assert_pass_through<T: PartialEq + Debug, const N: usize>(
    mask: &[bool; N],
    masked: &[T; N],
    full: &[T; N],
    original: &[T; N],
    context: &str,
) {
    for i in 0..N {
        let expected = if mask[i] { &full[i] } else { &original[i] };
        assert_eq!(
            &masked[i], expected,
            "{}: lane {} (selected: {}) broke pass-through",
            context, i, mask[i]
        );
    }
}

/// Assert two floats are within an absolute or relative tolerance
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, context: &str) {
    let abs_diff = (actual - expected).abs();
    let relative = if expected != 0.0 {
        abs_diff / expected.abs()
    } else {
        abs_diff
    };
    assert!(
        abs_diff <= tolerance || relative <= tolerance,
        "{}: values not approximately equal. Expected: {}, Actual: {}, Abs diff: {:.2e}",
        context,
        expected,
        actual,
        abs_diff
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_masked() {
        let out = ref_masked(&[true, false], &[1, 2], &[10, 20], |a, b| a + b);
        assert_eq!(out, [11, 2]);
    }

    #[test]
    fn test_ref_mandelbrot() {
        // Origin never escapes
        assert_eq!(ref_mandelbrot(0.0, 0.0, 50), 50);
        // Far outside escapes after one step
        assert_eq!(ref_mandelbrot(3.0, 0.0, 50), 1);
    }

    #[test]
    fn test_same_f32() {
        assert!(same_f32(f32::NAN, -f32::NAN));
        assert!(!same_f32(0.0, -0.0));
        assert!(same_f32(1.5, 1.5));
    }
}
