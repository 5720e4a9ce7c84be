//! Lane masks
//!
//! `Mask<N>` is the selector threaded through every masked operation. It has
//! no link to any particular vector: one mask can drive any vector with the
//! same lane count.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::lanes::{LaneCount, SupportedLaneCount};
use crate::traits::SimdMask;

/// One boolean per lane
///
/// # Example
///
/// ```rust
/// use lanes::{Mask, SimdMask};
///
/// let mut mask = Mask::<4>::splat(false);
/// assert!(!mask.any());
/// mask.set(2, true);
/// assert!(mask.any());
/// assert!(!mask.all());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask<const N: usize>
where
    LaneCount<N>: SupportedLaneCount,
{
    lanes: [bool; N],
}

impl<const N: usize> Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Number of lanes
    pub const LANES: usize = N;

    /// Build a mask from one boolean per lane
    #[inline]
    pub const fn from_array(lanes: [bool; N]) -> Self {
        Self { lanes }
    }

    /// Set every lane to `value`
    #[inline]
    pub const fn splat(value: bool) -> Self {
        Self { lanes: [value; N] }
    }

    /// Copy the lanes out as an array
    #[inline]
    pub const fn to_array(self) -> [bool; N] {
        self.lanes
    }

    /// Borrow the lanes
    #[inline]
    pub const fn as_array(&self) -> &[bool; N] {
        &self.lanes
    }

    /// Build a mask from the low `N` bits of `bits`, lane 0 in bit 0
    #[inline]
    pub fn from_bitmask(bits: u128) -> Self {
        Self {
            lanes: core::array::from_fn(|i| (bits >> i) & 1 == 1),
        }
    }

    /// Pack the lanes into an integer, lane 0 in bit 0
    #[inline]
    pub fn to_bitmask(self) -> u128 {
        self.lanes
            .iter()
            .enumerate()
            .fold(0u128, |bits, (i, &set)| bits | ((set as u128) << i))
    }

    /// Index of the lowest set lane
    #[inline]
    pub fn first_set(self) -> Option<usize> {
        self.lanes.iter().position(|&set| set)
    }

    /// Iterate over the lanes in order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.lanes.iter().copied()
    }
}

impl<const N: usize> SimdMask for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: bool) -> Self {
        Mask::splat(value)
    }

    #[inline(always)]
    fn test(&self, lane: usize) -> bool {
        self.lanes[lane]
    }

    #[inline(always)]
    fn set(&mut self, lane: usize, value: bool) {
        self.lanes[lane] = value;
    }

    #[inline(always)]
    fn all(self) -> bool {
        self.lanes.iter().all(|&set| set)
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.lanes.iter().any(|&set| set)
    }

    #[inline(always)]
    fn count(self) -> usize {
        self.lanes.iter().filter(|&&set| set).count()
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self {
            lanes: core::array::from_fn(|i| self.lanes[i] & rhs.lanes[i]),
        }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self {
            lanes: core::array::from_fn(|i| self.lanes[i] | rhs.lanes[i]),
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self {
            lanes: core::array::from_fn(|i| self.lanes[i] ^ rhs.lanes[i]),
        }
    }

    #[inline(always)]
    fn not(self) -> Self {
        Self {
            lanes: core::array::from_fn(|i| !self.lanes[i]),
        }
    }
}

impl<const N: usize> Default for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    fn default() -> Self {
        Self::splat(false)
    }
}

impl<const N: usize> fmt::Debug for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lanes.iter()).finish()
    }
}

impl<const N: usize> From<[bool; N]> for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    fn from(lanes: [bool; N]) -> Self {
        Self::from_array(lanes)
    }
}

impl<const N: usize> From<Mask<N>> for [bool; N]
where
    LaneCount<N>: SupportedLaneCount,
{
    fn from(mask: Mask<N>) -> Self {
        mask.to_array()
    }
}

macro_rules! impl_mask_bit_op {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident => $op:ident;)*) => {$(
        impl<const N: usize> $trait for Mask<N>
        where
            LaneCount<N>: SupportedLaneCount,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                SimdMask::$op(self, rhs)
            }
        }

        impl<const N: usize> $assign for Mask<N>
        where
            LaneCount<N>: SupportedLaneCount,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = SimdMask::$op(*self, rhs);
            }
        }
    )*};
}

impl_mask_bit_op! {
    BitAnd::bitand, BitAndAssign::bitand_assign => and;
    BitOr::bitor, BitOrAssign::bitor_assign => or;
    BitXor::bitxor, BitXorAssign::bitxor_assign => xor;
}

impl<const N: usize> Not for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        SimdMask::not(self)
    }
}
