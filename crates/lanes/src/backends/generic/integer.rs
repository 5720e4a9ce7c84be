use super::Vector;
use crate::element::{IntElement, UnsignedElement};
use crate::lanes::{fold, fold_seeded, map, zip_map, LaneCount};
use crate::resolver::SupportedLanes;
use crate::traits::{SimdInteger, SimdVector};

impl<T: IntElement, const N: usize> SimdInteger for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Unsigned>,
{
    type Amounts = Vector<T::Unsigned, N>;

    const AND_IDENTITY: T = <T as IntElement>::AND_IDENTITY;
    const OR_IDENTITY: T = <T as IntElement>::OR_IDENTITY;

    #[inline(always)]
    fn splat_amount(amount: u32) -> Self::Amounts {
        Vector::splat(<T::Unsigned as UnsignedElement>::from_index(amount as usize))
    }

    #[inline(always)]
    fn rem(self, rhs: Self) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &rhs.lanes, T::lane_rem))
    }

    #[inline(always)]
    fn bitwise_and(self, rhs: Self) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &rhs.lanes, |a, b| a & b))
    }

    #[inline(always)]
    fn bitwise_or(self, rhs: Self) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &rhs.lanes, |a, b| a | b))
    }

    #[inline(always)]
    fn bitwise_xor(self, rhs: Self) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &rhs.lanes, |a, b| a ^ b))
    }

    #[inline(always)]
    fn bitwise_not(self) -> Self {
        Self::from_lanes(map(&self.lanes, |a| !a))
    }

    #[inline(always)]
    fn saturating_add(self, rhs: Self) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &rhs.lanes, T::lane_saturating_add))
    }

    #[inline(always)]
    fn saturating_sub(self, rhs: Self) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &rhs.lanes, T::lane_saturating_sub))
    }

    #[inline(always)]
    fn shl(self, amounts: Self::Amounts) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &amounts.lanes, |a, s| a.lane_shl(s.to_shift())))
    }

    #[inline(always)]
    fn shr(self, amounts: Self::Amounts) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &amounts.lanes, |a, s| a.lane_shr(s.to_shift())))
    }

    #[inline(always)]
    fn rotate_left(self, amounts: Self::Amounts) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &amounts.lanes, |a, s| {
            a.lane_rotate_left(s.to_shift())
        }))
    }

    #[inline(always)]
    fn rotate_right(self, amounts: Self::Amounts) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &amounts.lanes, |a, s| {
            a.lane_rotate_right(s.to_shift())
        }))
    }

    #[inline(always)]
    fn horizontal_and(self) -> T {
        fold(&self.lanes, |a, b| a & b)
    }

    #[inline(always)]
    fn horizontal_or(self) -> T {
        fold(&self.lanes, |a, b| a | b)
    }

    #[inline(always)]
    fn horizontal_xor(self) -> T {
        fold(&self.lanes, |a, b| a ^ b)
    }

    #[inline(always)]
    fn horizontal_and_seeded(self, seed: T) -> T {
        fold_seeded(&self.lanes, seed, |a, b| a & b)
    }

    #[inline(always)]
    fn horizontal_or_seeded(self, seed: T) -> T {
        fold_seeded(&self.lanes, seed, |a, b| a | b)
    }

    #[inline(always)]
    fn horizontal_xor_seeded(self, seed: T) -> T {
        fold_seeded(&self.lanes, seed, |a, b| a ^ b)
    }
}

#[cfg(test)]
mod tests {
    use crate::mask::Mask;
    use crate::resolver::{i16x8, i32x4, i8x4, u16x4, u32x4, u64x2, u8x16, u8x4};
    use crate::traits::{SimdInteger, SimdVector};

    #[test]
    fn test_bitwise() {
        let a = u8x4::from_array([0b1100, 0b1010, 0xFF, 0x00]);
        let b = u8x4::splat(0b0110);
        assert_eq!(a.bitwise_and(b).to_array(), [0b0100, 0b0010, 0b0110, 0]);
        assert_eq!(a.bitwise_or(b).to_array(), [0b1110, 0b1110, 0xFF, 0b0110]);
        assert_eq!(a.bitwise_xor(b).to_array(), [0b1010, 0b1100, 0xF9, 0b0110]);
        assert_eq!(a.bitwise_not().to_array(), [0xF3, 0xF5, 0x00, 0xFF]);

        let mask = Mask::from_array([true, false, false, true]);
        assert_eq!(a.bitwise_not_masked(mask).to_array(), [0xF3, 0b1010, 0xFF, 0xFF]);
    }

    #[test]
    fn test_rem_wraps() {
        let a = i32x4::from_array([7, -7, i32::MIN, 9]);
        let b = i32x4::from_array([3, 3, -1, 10]);
        assert_eq!(a.rem(b).to_array(), [1, -1, 0, 9]);
    }

    #[test]
    fn test_shift_by_vector_and_scalar() {
        let v = u32x4::splat(1);
        let amounts = u32x4::from_array([0, 1, 31, 32]);
        // amounts are taken modulo 32
        assert_eq!(v.shl(amounts).to_array(), [1, 2, 1 << 31, 1]);
        assert_eq!(v.shl_scalar(4).to_array(), [16; 4]);

        let signed = i16x8::splat(-64);
        assert_eq!(signed.shr_scalar(2).to_array(), [-16; 8]);

        let mask = Mask::from_array([false, true, false, true]);
        assert_eq!(v.shl_scalar_masked(mask, 3).to_array(), [1, 8, 1, 8]);
    }

    #[test]
    fn test_signed_shift_amounts_use_unsigned_companion() {
        let v = i8x4::splat(-128);
        let amounts = u8x4::from_array([1, 7, 8, 9]);
        assert_eq!(v.shr(amounts).to_array(), [-64, -1, -128, -64]);
    }

    #[test]
    fn test_rotate() {
        let v = u16x4::from_array([0x8001, 0x1234, 0xFFFF, 0x0001]);
        assert_eq!(
            v.rotate_left_scalar(4).to_array(),
            [0x0018, 0x2341, 0xFFFF, 0x0010]
        );
        assert_eq!(v.rotate_right_scalar(4).rotate_left_scalar(4), v);
    }

    #[test]
    fn test_saturating() {
        let a = u8x4::from_array([250, 10, 0, 128]);
        assert_eq!(a.saturating_add_scalar(10).to_array(), [255, 20, 10, 138]);
        assert_eq!(a.saturating_sub_scalar(20).to_array(), [230, 0, 0, 108]);

        let b = i8x4::from_array([120, -120, 0, 5]);
        assert_eq!(b.saturating_add_scalar(10).to_array(), [127, -110, 10, 15]);
        assert_eq!(b.saturating_sub_scalar(10).to_array(), [110, -128, -10, -5]);
    }

    #[test]
    fn test_bit_reductions() {
        let v = u64x2::from_array([0xF0F0, 0x0FF0]);
        assert_eq!(v.horizontal_and(), 0x00F0);
        assert_eq!(v.horizontal_or(), 0xFFF0);
        assert_eq!(v.horizontal_xor(), 0xFF00);
        assert_eq!(v.horizontal_or_seeded(0x000F), 0xFFFF);
    }

    #[test]
    fn test_bit_reduction_identities() {
        let v = u8x16::splat(0x5A);
        let none = Mask::splat(false);
        assert_eq!(v.horizontal_and_masked(none), 0xFF);
        assert_eq!(v.horizontal_or_masked(none), 0);
        assert_eq!(v.horizontal_xor_masked(none), 0);
        assert_eq!(v.horizontal_xor_masked_seeded(none, 0x11), 0x11);

        let two = Mask::from_bitmask(0b11);
        assert_eq!(v.horizontal_xor_masked(two), 0);
        assert_eq!(v.horizontal_and_masked(two), 0x5A);
    }
}
