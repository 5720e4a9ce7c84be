use crate::element::UnsignedElement;
use crate::error::LaneError;

use super::SimdVector;

/// Indexed loads and stores
///
/// Lane `i` reads or writes `base[indices[i]]`. Indices are the unsigned
/// companion vector of the data vector. The slice forms bounds-check through
/// slice indexing and panic on an out-of-range index; [`try_gather`] and
/// [`try_scatter`] report it instead. The pointer forms do no checking.
///
/// [`try_gather`]: GatherScatter::try_gather
/// [`try_scatter`]: GatherScatter::try_scatter
///
/// # Example
///
/// ```rust
/// use lanes::{f32x4, u32x4, GatherScatter, SimdVector};
///
/// let table = [0.0, 10.0, 20.0, 30.0, 40.0];
/// let v = f32x4::gather(&table, u32x4::from_array([4, 0, 2, 2]));
/// assert_eq!(v.to_array(), [40.0, 0.0, 20.0, 20.0]);
/// ```
pub trait GatherScatter: SimdVector {
    /// Scalar type of one index
    type Index: UnsignedElement;

    /// Index vector
    type Indices: SimdVector<Scalar = Self::Index, Mask = Self::Mask>;

    /// Lane `i` becomes `base[indices[i]]`
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range
    fn gather(base: &[Self::Scalar], indices: Self::Indices) -> Self;

    /// Gather only the selected lanes; other lanes keep `self`
    ///
    /// Unselected indices are never read, so they may be out of range.
    ///
    /// # Panics
    ///
    /// Panics if a selected index is out of range
    fn gather_masked(self, mask: Self::Mask, base: &[Self::Scalar], indices: Self::Indices) -> Self;

    /// Gather through a raw pointer
    ///
    /// # Safety
    ///
    /// `base.add(indices[i])` must be valid for reads for every lane.
    unsafe fn gather_ptr(base: *const Self::Scalar, indices: Self::Indices) -> Self;

    /// Masked gather through a raw pointer
    ///
    /// # Safety
    ///
    /// `base.add(indices[i])` must be valid for reads for every selected lane.
    unsafe fn gather_masked_ptr(
        self,
        mask: Self::Mask,
        base: *const Self::Scalar,
        indices: Self::Indices,
    ) -> Self;

    /// `base[indices[i]]` becomes lane `i`, in lane order
    ///
    /// When two lanes share an index the higher lane's value is the one left
    /// in memory.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range
    fn scatter(self, base: &mut [Self::Scalar], indices: Self::Indices);

    /// Scatter only the selected lanes
    ///
    /// # Panics
    ///
    /// Panics if a selected index is out of range
    fn scatter_masked(self, mask: Self::Mask, base: &mut [Self::Scalar], indices: Self::Indices);

    /// Scatter through a raw pointer
    ///
    /// # Safety
    ///
    /// `base.add(indices[i])` must be valid for writes for every lane.
    unsafe fn scatter_ptr(self, base: *mut Self::Scalar, indices: Self::Indices);

    /// Masked scatter through a raw pointer
    ///
    /// # Safety
    ///
    /// `base.add(indices[i])` must be valid for writes for every selected lane.
    unsafe fn scatter_masked_ptr(self, mask: Self::Mask, base: *mut Self::Scalar, indices: Self::Indices);

    /// Gather with the indices given as a slice of at least `LANES` elements
    ///
    /// # Panics
    ///
    /// Panics if `indices` is too short or any index is out of range
    #[inline(always)]
    fn gather_slice(base: &[Self::Scalar], indices: &[Self::Index]) -> Self {
        Self::gather(base, <Self::Indices as SimdVector>::from_slice(indices))
    }

    /// Scatter with the indices given as a slice of at least `LANES` elements
    ///
    /// # Panics
    ///
    /// Panics if `indices` is too short or any index is out of range
    #[inline(always)]
    fn scatter_slice(self, base: &mut [Self::Scalar], indices: &[Self::Index]) {
        self.scatter(base, <Self::Indices as SimdVector>::from_slice(indices));
    }

    /// Gather, reporting the first out-of-range index instead of panicking
    #[inline]
    fn try_gather(base: &[Self::Scalar], indices: Self::Indices) -> Result<Self, LaneError> {
        check_indices(base.len(), indices.to_array().as_ref())?;
        Ok(Self::gather(base, indices))
    }

    /// Scatter, reporting the first out-of-range index instead of panicking
    ///
    /// Nothing is written when an index is out of range.
    #[inline]
    fn try_scatter(self, base: &mut [Self::Scalar], indices: Self::Indices) -> Result<(), LaneError> {
        check_indices(base.len(), indices.to_array().as_ref())?;
        self.scatter(base, indices);
        Ok(())
    }
}

fn check_indices<I: UnsignedElement>(len: usize, indices: &[I]) -> Result<(), LaneError> {
    for (lane, index) in indices.iter().map(|i| i.to_index()).enumerate() {
        if index >= len {
            return Err(LaneError::IndexOutOfRange { lane, index, len });
        }
    }
    Ok(())
}
