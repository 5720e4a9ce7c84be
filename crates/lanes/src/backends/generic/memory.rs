use super::Vector;
use crate::element::{SimdElement, UnsignedElement};
use crate::lanes::{map, LaneCount};
use crate::mask::Mask;
use crate::resolver::SupportedLanes;
use crate::traits::{GatherScatter, SimdMask};

impl<T: SimdElement, const N: usize> GatherScatter for Vector<T, N>
where
    LaneCount<N>: SupportedLanes<T> + SupportedLanes<T::Unsigned>,
{
    type Index = T::Unsigned;
    type Indices = Vector<T::Unsigned, N>;

    #[inline(always)]
    fn gather(base: &[T], indices: Self::Indices) -> Self {
        Self::from_lanes(map(&indices.lanes, |index| base[index.to_index()]))
    }

    #[inline(always)]
    fn gather_masked(self, mask: Mask<N>, base: &[T], indices: Self::Indices) -> Self {
        Self::from_lanes(core::array::from_fn(|lane| {
            if mask.test(lane) {
                base[indices.lanes[lane].to_index()]
            } else {
                self.lanes[lane]
            }
        }))
    }

    #[inline(always)]
    unsafe fn gather_ptr(base: *const T, indices: Self::Indices) -> Self {
        Self::from_lanes(map(&indices.lanes, |index| *base.add(index.to_index())))
    }

    #[inline(always)]
    unsafe fn gather_masked_ptr(self, mask: Mask<N>, base: *const T, indices: Self::Indices) -> Self {
        Self::from_lanes(core::array::from_fn(|lane| {
            if mask.test(lane) {
                *base.add(indices.lanes[lane].to_index())
            } else {
                self.lanes[lane]
            }
        }))
    }

    #[inline(always)]
    fn scatter(self, base: &mut [T], indices: Self::Indices) {
        for (value, index) in self.lanes.iter().zip(indices.lanes.iter()) {
            base[index.to_index()] = *value;
        }
    }

    #[inline(always)]
    fn scatter_masked(self, mask: Mask<N>, base: &mut [T], indices: Self::Indices) {
        for lane in 0..N {
            if mask.test(lane) {
                base[indices.lanes[lane].to_index()] = self.lanes[lane];
            }
        }
    }

    #[inline(always)]
    unsafe fn scatter_ptr(self, base: *mut T, indices: Self::Indices) {
        for (value, index) in self.lanes.iter().zip(indices.lanes.iter()) {
            base.add(index.to_index()).write(*value);
        }
    }

    #[inline(always)]
    unsafe fn scatter_masked_ptr(self, mask: Mask<N>, base: *mut T, indices: Self::Indices) {
        for lane in 0..N {
            if mask.test(lane) {
                base.add(indices.lanes[lane].to_index()).write(self.lanes[lane]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LaneError;
    use crate::mask::Mask;
    use crate::resolver::{f32x4, f64x2, i16x8, u16x8, u32x4, u64x2};
    use crate::traits::{GatherScatter, SimdVector};

    #[test]
    fn test_gather() {
        let table = [5i16, 6, 7, 8, 9];
        let indices = u16x8::from_array([4, 3, 2, 1, 0, 0, 4, 2]);
        let v = i16x8::gather(&table, indices);
        assert_eq!(v.to_array(), [9, 8, 7, 6, 5, 5, 9, 7]);
        assert_eq!(i16x8::gather_slice(&table, &[0; 8]), i16x8::splat(5));
    }

    #[test]
    fn test_masked_gather_skips_unselected_indices() {
        let table = [1.0f32, 2.0, 3.0];
        // lanes 1 and 3 point past the end but are masked off
        let indices = u32x4::from_array([2, 1000, 0, u32::MAX]);
        let mask = Mask::from_array([true, false, true, false]);
        let v = f32x4::splat(-1.0).gather_masked(mask, &table, indices);
        assert_eq!(v.to_array(), [3.0, -1.0, 1.0, -1.0]);
    }

    #[test]
    fn test_try_gather_reports_lane() {
        let table = [0u32; 4];
        let indices = u32x4::from_array([0, 1, 4, 9]);
        assert_eq!(
            u32x4::try_gather(&table, indices),
            Err(LaneError::IndexOutOfRange {
                lane: 2,
                index: 4,
                len: 4
            })
        );
    }

    #[test]
    #[should_panic]
    fn test_gather_out_of_range_panics() {
        let table = [0u64; 2];
        let _ = u64x2::gather(&table, u64x2::from_array([0, 2]));
    }

    #[test]
    fn test_scatter_then_gather() {
        let mut memory = [0.0f64; 8];
        let indices = u64x2::from_array([6, 1]);
        let v = f64x2::from_array([1.5, 2.5]);
        v.scatter(&mut memory, indices);
        assert_eq!(memory[6], 1.5);
        assert_eq!(memory[1], 2.5);
        assert_eq!(f64x2::gather(&memory, indices), v);
    }

    #[test]
    fn test_scatter_collision_keeps_last_lane() {
        let mut memory = [0u32; 2];
        u32x4::from_array([1, 2, 3, 4]).scatter_slice(&mut memory, &[0, 1, 0, 1]);
        assert_eq!(memory, [3, 4]);
    }

    #[test]
    fn test_masked_scatter_writes_only_selected() {
        let mut memory = [9u16; 4];
        let mask = Mask::from_array([false, true, false, true, false, false, false, false]);
        u16x8::splat(1).scatter_masked(mask, &mut memory, u16x8::from_array([0, 1, 2, 3, 40, 50, 60, 70]));
        assert_eq!(memory, [9, 1, 9, 1]);
    }

    #[test]
    fn test_try_scatter_writes_nothing_on_error() {
        let mut memory = [0u32; 3];
        let result = u32x4::splat(5).try_scatter(&mut memory, u32x4::from_array([0, 1, 2, 3]));
        assert!(matches!(result, Err(LaneError::IndexOutOfRange { lane: 3, .. })));
        assert_eq!(memory, [0, 0, 0]);
    }

    #[test]
    fn test_pointer_forms() {
        let table = [10u32, 20, 30, 40];
        let indices = u32x4::from_array([3, 2, 1, 0]);
        let v = unsafe { u32x4::gather_ptr(table.as_ptr(), indices) };
        assert_eq!(v.to_array(), [40, 30, 20, 10]);

        let mut out = [0u32; 4];
        unsafe { v.scatter_ptr(out.as_mut_ptr(), indices) };
        assert_eq!(out, table);
    }
}
