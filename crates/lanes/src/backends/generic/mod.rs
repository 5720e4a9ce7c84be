//! Generic backend
//!
//! `Vector<T, N>` implements every contract trait with explicit per-lane
//! loops over a `[T; N]` array. It works for every row of the resolver table
//! on every target, and its results define the semantics other backends
//! must reproduce.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::element::SimdElement;
use crate::lanes::LaneCount;
use crate::resolver::SupportedLanes;

mod convert;
mod float;
mod integer;
mod memory;
mod operators;
mod vector;

/// Fixed-width vector of `N` lanes of `T`
///
/// Aligned to `N * size_of::<T>()` bytes. The type only exists for pairs in
/// the resolver table; use the aliases such as [`u32x4`](crate::u32x4) to
/// name one.
///
/// # Example
///
/// ```rust
/// use lanes::{u32x4, Mask, SimdVector};
///
/// let a = u32x4::from_array([2890127753, 3623131505, 3730078463, 2142934923]);
/// let b = u32x4::from_array([15667904, 794793862, 147627889, 2249388176]);
/// assert_eq!(a.add(b).to_array(), [2905795657, 122958071, 3877706352, 97355803]);
///
/// let mask = Mask::from_array([false, false, false, true]);
/// let c = a.add_masked(mask, b);
/// assert_eq!(c.to_array(), [2890127753, 3623131505, 3730078463, 97355803]);
/// ```
#[repr(C)]
pub struct Vector<T: SimdElement, const N: usize>
where
    LaneCount<N>: SupportedLanes<T>,
{
    lanes: [T; N],
    _align: [<LaneCount<N> as SupportedLanes<T>>::Align; 0],
}

impl<T: SimdElement, const N: usize> Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T>,
{
    #[inline(always)]
    pub(crate) const fn from_lanes(lanes: [T; N]) -> Self {
        Self { lanes, _align: [] }
    }

    /// Borrow the lanes
    #[inline(always)]
    pub const fn as_array(&self) -> &[T; N] {
        &self.lanes
    }

    /// Borrow the lanes mutably
    #[inline(always)]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.lanes
    }
}

impl<T: SimdElement, const N: usize> Clone for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T>,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SimdElement, const N: usize> Copy for Vector<T, N> where LaneCount<N>: SupportedLanes<T> {}

impl<T: SimdElement, const N: usize> PartialEq for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T>,
{
    /// True if every lane compares equal; a NaN lane makes vectors unequal
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.lanes == other.lanes
    }
}

impl<T: SimdElement, const N: usize> Default for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T>,
{
    #[inline]
    fn default() -> Self {
        Self::from_lanes([T::ZERO; N])
    }
}

impl<T: SimdElement, const N: usize> fmt::Debug for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lanes.iter()).finish()
    }
}

impl<T: SimdElement, const N: usize> From<[T; N]> for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T>,
{
    #[inline]
    fn from(lanes: [T; N]) -> Self {
        Self::from_lanes(lanes)
    }
}

impl<T: SimdElement, const N: usize> From<Vector<T, N>> for [T; N]
where
    LaneCount<N>: SupportedLanes<T>,
{
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.lanes
    }
}

impl<T: SimdElement, const N: usize> Index<usize> for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T>,
{
    type Output = T;

    #[inline(always)]
    fn index(&self, lane: usize) -> &T {
        &self.lanes[lane]
    }
}

impl<T: SimdElement, const N: usize> IndexMut<usize> for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T>,
{
    #[inline(always)]
    fn index_mut(&mut self, lane: usize) -> &mut T {
        &mut self.lanes[lane]
    }
}

#[cfg(test)]
mod tests {
    use crate::resolver::{f64x16, i16x8, u32x4, u8x1};

    #[test]
    fn test_layout() {
        assert_eq!(core::mem::size_of::<u32x4>(), 16);
        assert_eq!(core::mem::align_of::<u32x4>(), 16);
        assert_eq!(core::mem::align_of::<i16x8>(), 16);
        assert_eq!(core::mem::size_of::<f64x16>(), 128);
        assert_eq!(core::mem::align_of::<u8x1>(), 1);
    }

    #[test]
    fn test_index_and_default() {
        let mut v = u32x4::default();
        assert_eq!(v, u32x4::from([0; 4]));
        v[2] = 7;
        assert_eq!(v[2], 7);
        assert_eq!(<[u32; 4]>::from(v), [0, 0, 7, 0]);
    }

    #[test]
    fn test_nan_lanes_are_unequal() {
        let v = crate::resolver::f32x2::from([f32::NAN, 1.0]);
        assert_ne!(v, v);
    }
}
