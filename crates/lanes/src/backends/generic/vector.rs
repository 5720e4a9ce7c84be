use super::Vector;
use crate::element::SimdElement;
use crate::lanes::{fold, fold_seeded, select, zip_map, LaneCount};
use crate::mask::Mask;
use crate::resolver::SupportedLanes;
use crate::traits::SimdVector;

impl<T: SimdElement, const N: usize> SimdVector for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T>,
{
    type Array = [T; N];

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self::from_lanes([value; N])
    }

    #[inline(always)]
    fn from_array(array: [T; N]) -> Self {
        Self::from_lanes(array)
    }

    #[inline(always)]
    fn to_array(self) -> [T; N] {
        self.lanes
    }

    #[inline(always)]
    fn select(mask: Mask<N>, if_true: Self, if_false: Self) -> Self {
        Self::from_lanes(select(mask.as_array(), &if_true.lanes, &if_false.lanes))
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> T {
        self.lanes[lane]
    }

    #[inline(always)]
    fn insert(&mut self, lane: usize, value: T) {
        self.lanes[lane] = value;
    }

    #[inline(always)]
    unsafe fn load_aligned_ptr(ptr: *const T) -> Self {
        ptr.cast::<Self>().read()
    }

    #[inline(always)]
    unsafe fn store_aligned_ptr(self, ptr: *mut T) {
        ptr.cast::<Self>().write(self);
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &rhs.lanes, T::lane_add))
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &rhs.lanes, T::lane_sub))
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &rhs.lanes, T::lane_mul))
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &rhs.lanes, T::lane_div))
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &rhs.lanes, T::lane_min))
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::from_lanes(zip_map(&self.lanes, &rhs.lanes, T::lane_max))
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Mask<N> {
        Mask::from_array(zip_map(&self.lanes, &rhs.lanes, |a, b| a == b))
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Mask<N> {
        Mask::from_array(zip_map(&self.lanes, &rhs.lanes, |a, b| a < b))
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Mask<N> {
        Mask::from_array(zip_map(&self.lanes, &rhs.lanes, |a, b| a <= b))
    }

    #[inline(always)]
    fn horizontal_sum(self) -> T {
        fold(&self.lanes, T::lane_add)
    }

    #[inline(always)]
    fn horizontal_product(self) -> T {
        fold(&self.lanes, T::lane_mul)
    }

    #[inline(always)]
    fn horizontal_min(self) -> T {
        fold(&self.lanes, T::lane_min)
    }

    #[inline(always)]
    fn horizontal_max(self) -> T {
        fold(&self.lanes, T::lane_max)
    }

    #[inline(always)]
    fn horizontal_sum_seeded(self, seed: T) -> T {
        fold_seeded(&self.lanes, seed, T::lane_add)
    }

    #[inline(always)]
    fn horizontal_product_seeded(self, seed: T) -> T {
        fold_seeded(&self.lanes, seed, T::lane_mul)
    }

    #[inline(always)]
    fn horizontal_min_seeded(self, seed: T) -> T {
        fold_seeded(&self.lanes, seed, T::lane_min)
    }

    #[inline(always)]
    fn horizontal_max_seeded(self, seed: T) -> T {
        fold_seeded(&self.lanes, seed, T::lane_max)
    }

    #[inline(always)]
    fn reverse(self) -> Self {
        Self::from_lanes(core::array::from_fn(|i| self.lanes[N - 1 - i]))
    }
}

#[cfg(test)]
mod tests {
    use crate::mask::Mask;
    use crate::resolver::{f32x4, f64x2, i32x4, u16x8, u32x4, u8x1, u8x16};
    use crate::swizzle::Swizzle;
    use crate::traits::{SimdMask, SimdVector};

    #[test]
    fn test_wrapping_add_vectors() {
        let a = u32x4::from_array([2890127753, 3623131505, 3730078463, 2142934923]);
        let b = u32x4::from_array([15667904, 794793862, 147627889, 2249388176]);
        assert_eq!(
            a.add(b).to_array(),
            [2905795657, 122958071, 3877706352, 97355803]
        );
    }

    #[test]
    fn test_masked_add_changes_only_selected_lane() {
        let a = u32x4::from_array([2890127753, 3623131505, 3730078463, 2142934923]);
        let b = u32x4::from_array([15667904, 794793862, 147627889, 2249388176]);
        let mask = Mask::from_array([false, false, false, true]);

        let result = a.add_masked(mask, b);
        assert_eq!(result.to_array(), [2890127753, 3623131505, 3730078463, 97355803]);

        let mut in_place = a;
        in_place.add_masked_assign(mask, b);
        assert_eq!(in_place, result);
    }

    #[test]
    fn test_scalar_forms() {
        let v = i32x4::from_array([1, -2, 3, -4]);
        assert_eq!(v.mul_scalar(3).to_array(), [3, -6, 9, -12]);
        assert_eq!(v.max_scalar(0).to_array(), [1, 0, 3, 0]);

        let mask = Mask::from_array([true, false, true, false]);
        assert_eq!(v.sub_scalar_masked(mask, 10).to_array(), [-9, -2, -7, -4]);

        let mut w = v;
        w.add_scalar_assign(1);
        w.div_scalar_masked_assign(mask, 2);
        assert_eq!(w.to_array(), [1, -1, 2, -3]);
    }

    #[test]
    fn test_integer_min_over_minus_one_wraps() {
        let v = i32x4::splat(i32::MIN);
        assert_eq!(v.div_scalar(-1).to_array(), [i32::MIN; 4]);
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_panics() {
        let _ = u16x8::splat(1).div(u16x8::zero());
    }

    #[test]
    fn test_float_division_by_zero_is_infinite() {
        let v = f64x2::from_array([1.0, -1.0]).div(f64x2::zero());
        assert_eq!(v.to_array(), [f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn test_comparisons() {
        let a = f32x4::from_array([1.0, 2.0, f32::NAN, 4.0]);
        let b = f32x4::splat(2.0);
        assert_eq!(a.lt(b).to_array(), [true, false, false, false]);
        assert_eq!(a.le(b).to_array(), [true, true, false, false]);
        assert_eq!(a.gt(b).to_array(), [false, false, false, true]);
        assert_eq!(a.ge(b).to_array(), [false, true, false, true]);
        assert_eq!(a.eq(b).to_array(), [false, true, false, false]);
        assert_eq!(a.ne(b).to_array(), [true, false, true, true]);
        assert!(!a.eq_all(a));
        assert!(a.ne_any(a));
        assert!(b.eq_all_scalar(2.0));
        assert_eq!(a.gt_scalar(1.5).count(), 2);
    }

    #[test]
    fn test_fused_forms() {
        let a = i32x4::from_array([1, 2, 3, 4]);
        let b = i32x4::splat(10);
        let c = i32x4::splat(5);
        assert_eq!(a.mul_add(b, c).to_array(), [15, 25, 35, 45]);
        assert_eq!(a.mul_sub(b, c).to_array(), [5, 15, 25, 35]);
        assert_eq!(a.add_mul(b, c).to_array(), [55, 60, 65, 70]);
        assert_eq!(a.sub_mul(b, c).to_array(), [-45, -40, -35, -30]);

        let mask = Mask::from_array([false, true, false, true]);
        assert_eq!(a.mul_add_masked(mask, b, c).to_array(), [1, 25, 3, 45]);
    }

    #[test]
    fn test_reductions() {
        let v = u8x16::from_array(core::array::from_fn(|i| i as u8 + 1));
        assert_eq!(v.horizontal_sum(), 136);
        assert_eq!(v.horizontal_min(), 1);
        assert_eq!(v.horizontal_max(), 16);
        // 16! wraps in u8
        assert_eq!(v.horizontal_product(), 0);
        assert_eq!(v.horizontal_sum_seeded(200), 80);

        let none = Mask::splat(false);
        assert_eq!(v.horizontal_sum_masked(none), 0);
        assert_eq!(v.horizontal_product_masked(none), 1);
        assert_eq!(v.horizontal_min_masked(none), u8::MAX);
        assert_eq!(v.horizontal_max_masked(none), u8::MIN);
        assert_eq!(v.horizontal_max_masked_seeded(none, 42), 42);

        let low = Mask::from_bitmask(0b1111);
        assert_eq!(v.horizontal_sum_masked(low), 10);
        assert_eq!(v.horizontal_product_masked(low), 24);
    }

    #[test]
    fn test_float_reduction_identities() {
        let v = f32x4::from_array([3.0, -1.0, 2.0, 8.0]);
        let none = Mask::splat(false);
        assert_eq!(v.horizontal_min_masked(none), f32::INFINITY);
        assert_eq!(v.horizontal_max_masked(none), f32::NEG_INFINITY);
        assert_eq!(v.horizontal_min(), -1.0);
        assert_eq!(v.horizontal_product_seeded(0.5), -24.0);
    }

    #[test]
    fn test_single_lane_vector() {
        let v = u8x1::splat(200);
        assert_eq!(v.add_scalar(100).extract(0), 44);
        assert_eq!(v.horizontal_sum(), 200);
        assert_eq!(v.reverse(), v);
        assert!(v.is_unique());
    }

    #[test]
    fn test_lane_movement() {
        let v = i32x4::from_array([10, 20, 30, 40]);
        assert_eq!(v.reverse().to_array(), [40, 30, 20, 10]);
        assert_eq!(v.swizzle(&Swizzle::new([1, 1, 3, 0])).to_array(), [20, 20, 40, 10]);

        let mask = Mask::from_array([true, false, false, true]);
        assert_eq!(
            v.swizzle_masked(mask, &Swizzle::reversed()).to_array(),
            [40, 20, 30, 10]
        );
        assert_eq!(v.blend(mask, i32x4::zero()).to_array(), [0, 20, 30, 0]);

        let mut w = v;
        w.insert(2, -1);
        assert_eq!(w.extract(2), -1);
        assert!(v.is_unique());
        w.insert(1, 10);
        assert!(!w.is_unique());
    }

    #[test]
    fn test_slices() {
        let data = [1u32, 2, 3, 4, 5];
        let v = u32x4::from_slice(&data);
        assert_eq!(v.to_array(), [1, 2, 3, 4]);
        assert!(u32x4::try_from_slice(&data[..3]).is_err());

        let mut out = [0u32; 6];
        v.to_slice(&mut out[1..]);
        assert_eq!(out, [0, 1, 2, 3, 4, 0]);

        let mask = Mask::from_array([true, false, true, false]);
        let mut masked = [9u32; 4];
        v.store_masked(mask, &mut masked);
        assert_eq!(masked, [1, 9, 3, 9]);

        let loaded = u32x4::splat(7).load_masked(mask, &data);
        assert_eq!(loaded.to_array(), [1, 7, 3, 7]);
    }

    #[test]
    #[should_panic(expected = "too short")]
    fn test_short_slice_panics() {
        let _ = u32x4::from_slice(&[1, 2, 3]);
    }
}
