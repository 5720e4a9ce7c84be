use super::Vector;
use crate::element::{FloatToInt, IntElement, IntToFloat, Narrow, SimdElement, Widen};
use crate::lanes::{map, LaneCount};
use crate::resolver::SupportedLanes;
use crate::traits::{Demote, FloatToIntVector, IntToFloatVector, Packable, Promote, ReinterpretSign};

impl<T: Widen, const N: usize> Promote for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Wide>,
{
    type Output = Vector<T::Wide, N>;

    #[inline(always)]
    fn promote(self) -> Self::Output {
        Vector::from_lanes(map(&self.lanes, T::widen))
    }
}

impl<T: Narrow, const N: usize> Demote for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Narrow>,
{
    type Output = Vector<T::Narrow, N>;

    #[inline(always)]
    fn demote(self) -> Self::Output {
        Vector::from_lanes(map(&self.lanes, T::narrow))
    }
}

impl<T: IntElement, const N: usize> ReinterpretSign for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Unsigned> + SupportedLanes<T::Signed>,
{
    type AsUnsigned = Vector<T::Unsigned, N>;
    type AsSigned = Vector<T::Signed, N>;

    #[inline(always)]
    fn to_unsigned(self) -> Self::AsUnsigned {
        Vector::from_lanes(map(&self.lanes, T::to_unsigned_bits))
    }

    #[inline(always)]
    fn to_signed(self) -> Self::AsSigned {
        Vector::from_lanes(map(&self.lanes, T::to_signed_bits))
    }
}

impl<T: IntToFloat, const N: usize> IntToFloatVector for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Float>,
{
    type Float = Vector<T::Float, N>;

    #[inline(always)]
    fn to_float(self) -> Self::Float {
        Vector::from_lanes(map(&self.lanes, T::to_float))
    }
}

impl<T: FloatToInt, const N: usize> FloatToIntVector for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Int> + SupportedLanes<T::Uint>,
{
    type Int = Vector<T::Int, N>;
    type Uint = Vector<T::Uint, N>;

    #[inline(always)]
    fn to_int(self) -> Self::Int {
        Vector::from_lanes(map(&self.lanes, T::to_int))
    }

    #[inline(always)]
    fn to_uint(self) -> Self::Uint {
        Vector::from_lanes(map(&self.lanes, T::to_uint))
    }
}

macro_rules! impl_packable {
    ($($n:literal => $half:literal),*) => {$(
        impl<T: SimdElement> Packable for Vector<T, $n>
        where
            LaneCount<$n>: SupportedLanes<T>,
            LaneCount<$half>: SupportedLanes<T>,
        {
            type Half = Vector<T, $half>;

            #[inline(always)]
            fn pack(lo: Self::Half, hi: Self::Half) -> Self {
                Self::from_lanes(core::array::from_fn(|i| {
                    if i < $half {
                        lo.lanes[i]
                    } else {
                        hi.lanes[i - $half]
                    }
                }))
            }

            #[inline(always)]
            fn unpack(self) -> (Self::Half, Self::Half) {
                (
                    Vector::from_lanes(core::array::from_fn(|i| self.lanes[i])),
                    Vector::from_lanes(core::array::from_fn(|i| self.lanes[i + $half])),
                )
            }
        }
    )*};
}

impl_packable!(2 => 1, 4 => 2, 8 => 4, 16 => 8, 32 => 16, 64 => 32, 128 => 64);
