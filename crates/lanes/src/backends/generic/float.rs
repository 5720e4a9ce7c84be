use super::Vector;
use crate::element::{FloatElement, SignedElement};
use crate::lanes::{map, LaneCount};
use crate::mask::Mask;
use crate::resolver::SupportedLanes;
use crate::traits::{SimdFloat, SimdSigned};

impl<T: SignedElement, const N: usize> SimdSigned for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T>,
{
    #[inline(always)]
    fn neg(self) -> Self {
        Self::from_lanes(map(&self.lanes, T::lane_neg))
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self::from_lanes(map(&self.lanes, T::lane_abs))
    }
}

impl<T: FloatElement, const N: usize> SimdFloat for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Unsigned>,
{
    type Bits = Vector<T::Unsigned, N>;

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self::from_lanes(map(&self.lanes, T::lane_sqrt))
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self::from_lanes(map(&self.lanes, T::lane_floor))
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        Self::from_lanes(map(&self.lanes, T::lane_ceil))
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self::from_lanes(map(&self.lanes, T::lane_round))
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        Self::from_lanes(map(&self.lanes, T::lane_trunc))
    }

    #[inline(always)]
    fn is_nan(self) -> Mask<N> {
        Mask::from_array(map(&self.lanes, T::lane_is_nan))
    }

    #[inline(always)]
    fn is_infinite(self) -> Mask<N> {
        Mask::from_array(map(&self.lanes, T::lane_is_infinite))
    }

    #[inline(always)]
    fn is_finite(self) -> Mask<N> {
        Mask::from_array(map(&self.lanes, T::lane_is_finite))
    }

    #[inline(always)]
    fn is_sign_negative(self) -> Mask<N> {
        Mask::from_array(map(&self.lanes, T::lane_is_sign_negative))
    }

    #[inline(always)]
    fn to_bits(self) -> Self::Bits {
        Vector::from_lanes(map(&self.lanes, T::lane_to_bits))
    }

    #[inline(always)]
    fn from_bits(bits: Self::Bits) -> Self {
        Self::from_lanes(map(&bits.lanes, T::lane_from_bits))
    }
}
