use crate::element::SimdElement;
use crate::error::{check_aligned, check_len, LaneError};
use crate::resolver::VectorTraits;
use crate::swizzle::LaneIndices;

use super::SimdMask;

/// Core vector contract
///
/// Implemented by every vector type of every backend. Required methods are
/// the unmasked kernels; everything else has a default built on them.
///
/// Integer `add`, `sub` and `mul` wrap. Integer `div` follows `wrapping_div`:
/// `MIN / -1` wraps and division by zero panics, as the scalar operator does.
///
/// # Example
///
/// ```rust
/// use lanes::{u32x4, SimdVector};
///
/// let a = u32x4::from_array([1, 2, 3, u32::MAX]);
/// let b = u32x4::splat(1);
/// assert_eq!(a.add(b).to_array(), [2, 3, 4, 0]);
/// assert_eq!(a.horizontal_sum(), 5);
/// ```
pub trait SimdVector: VectorTraits + Sized {
    /// Lanes as a plain array, `[Self::Scalar; LANES]`
    type Array: Copy + AsRef<[Self::Scalar]> + AsMut<[Self::Scalar]>;

    // Construction

    /// Broadcast a scalar value to all lanes
    fn splat(value: Self::Scalar) -> Self;

    /// All lanes zero
    #[inline(always)]
    fn zero() -> Self {
        Self::splat(<Self::Scalar as SimdElement>::ZERO)
    }

    /// Build a vector from one value per lane
    fn from_array(array: Self::Array) -> Self;

    /// Copy the lanes out as an array
    fn to_array(self) -> Self::Array;

    /// Per-lane choice: `mask[i] ? if_true[i] : if_false[i]`
    ///
    /// Every masked operation is this applied to the full result and the
    /// receiver, which is what keeps unselected lanes unchanged.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;

    /// Read one lane
    ///
    /// # Panics
    ///
    /// Panics if `lane` is not below `LANES`
    #[inline(always)]
    fn extract(self, lane: usize) -> Self::Scalar {
        self.to_array().as_ref()[lane]
    }

    /// Write one lane
    ///
    /// # Panics
    ///
    /// Panics if `lane` is not below `LANES`
    #[inline(always)]
    fn insert(&mut self, lane: usize, value: Self::Scalar) {
        let mut array = self.to_array();
        array.as_mut()[lane] = value;
        *self = Self::from_array(array);
    }

    // Memory

    /// Load from the first `LANES` elements of a slice
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than `LANES` elements
    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(
            slice.len() >= Self::LANES,
            "slice of length {} too short for {} lanes",
            slice.len(),
            Self::LANES
        );
        let mut array = Self::zero().to_array();
        array.as_mut().copy_from_slice(&slice[..Self::LANES]);
        Self::from_array(array)
    }

    /// Load from a slice, reporting a short slice instead of panicking
    #[inline]
    fn try_from_slice(slice: &[Self::Scalar]) -> Result<Self, LaneError> {
        check_len(Self::LANES, slice.len())?;
        Ok(Self::from_slice(slice))
    }

    /// Store to the first `LANES` elements of a slice
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than `LANES` elements
    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(
            slice.len() >= Self::LANES,
            "slice of length {} too short for {} lanes",
            slice.len(),
            Self::LANES
        );
        slice[..Self::LANES].copy_from_slice(self.to_array().as_ref());
    }

    /// Load from a slice whose start is aligned to `ALIGNMENT`
    ///
    /// # Panics
    ///
    /// Panics if the slice is too short or misaligned
    #[inline(always)]
    fn from_slice_aligned(slice: &[Self::Scalar]) -> Self {
        assert!(
            slice.as_ptr() as usize % Self::ALIGNMENT == 0,
            "slice is not aligned to {} bytes",
            Self::ALIGNMENT
        );
        Self::from_slice(slice)
    }

    /// Aligned load, reporting a short or misaligned slice instead of panicking
    #[inline]
    fn try_from_slice_aligned(slice: &[Self::Scalar]) -> Result<Self, LaneError> {
        check_len(Self::LANES, slice.len())?;
        check_aligned(slice.as_ptr(), Self::ALIGNMENT)?;
        Ok(Self::from_slice(slice))
    }

    /// Store to a slice whose start is aligned to `ALIGNMENT`
    ///
    /// # Panics
    ///
    /// Panics if the slice is too short or misaligned
    #[inline(always)]
    fn to_slice_aligned(self, slice: &mut [Self::Scalar]) {
        assert!(
            slice.as_ptr() as usize % Self::ALIGNMENT == 0,
            "slice is not aligned to {} bytes",
            Self::ALIGNMENT
        );
        self.to_slice(slice);
    }

    /// Masked load: selected lanes come from `slice`, the rest keep `self`
    ///
    /// The full `LANES` elements are loaded, so the slice must be long enough
    /// even when lanes are masked off.
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than `LANES` elements
    #[inline(always)]
    fn load_masked(self, mask: Self::Mask, slice: &[Self::Scalar]) -> Self {
        Self::select(mask, Self::from_slice(slice), self)
    }

    /// Masked store: only selected lanes are written
    ///
    /// Elements of `slice` behind unselected lanes are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than `LANES` elements
    #[inline(always)]
    fn store_masked(self, mask: Self::Mask, slice: &mut [Self::Scalar]) {
        assert!(
            slice.len() >= Self::LANES,
            "slice of length {} too short for {} lanes",
            slice.len(),
            Self::LANES
        );
        let array = self.to_array();
        for (lane, &value) in array.as_ref().iter().enumerate() {
            if mask.test(lane) {
                slice[lane] = value;
            }
        }
    }

    /// Load `LANES` elements from a raw pointer
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANES` elements.
    #[inline(always)]
    unsafe fn load_ptr(ptr: *const Self::Scalar) -> Self {
        Self::from_slice(core::slice::from_raw_parts(ptr, Self::LANES))
    }

    /// Load `LANES` elements from an aligned raw pointer
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANES` elements and aligned to
    /// `ALIGNMENT` bytes. A misaligned pointer is undefined behaviour; it is
    /// not detected or corrected.
    #[inline(always)]
    unsafe fn load_aligned_ptr(ptr: *const Self::Scalar) -> Self {
        Self::load_ptr(ptr)
    }

    /// Store `LANES` elements through a raw pointer
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `LANES` elements.
    #[inline(always)]
    unsafe fn store_ptr(self, ptr: *mut Self::Scalar) {
        self.to_slice(core::slice::from_raw_parts_mut(ptr, Self::LANES));
    }

    /// Store `LANES` elements through an aligned raw pointer
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `LANES` elements and aligned to
    /// `ALIGNMENT` bytes. A misaligned pointer is undefined behaviour.
    #[inline(always)]
    unsafe fn store_aligned_ptr(self, ptr: *mut Self::Scalar) {
        self.store_ptr(ptr);
    }

    /// Masked load through a raw pointer
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANES` elements.
    #[inline(always)]
    unsafe fn load_masked_ptr(self, mask: Self::Mask, ptr: *const Self::Scalar) -> Self {
        Self::select(mask, Self::load_ptr(ptr), self)
    }

    /// Masked store through a raw pointer; only selected lanes are written
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of every selected lane.
    #[inline(always)]
    unsafe fn store_masked_ptr(self, mask: Self::Mask, ptr: *mut Self::Scalar) {
        let array = self.to_array();
        for (lane, &value) in array.as_ref().iter().enumerate() {
            if mask.test(lane) {
                ptr.add(lane).write(value);
            }
        }
    }

    // Arithmetic

    /// Lane-wise addition (wrapping for integers)
    fn add(self, rhs: Self) -> Self;

    /// Lane-wise subtraction (wrapping for integers)
    fn sub(self, rhs: Self) -> Self;

    /// Lane-wise multiplication (wrapping for integers)
    fn mul(self, rhs: Self) -> Self;

    /// Lane-wise division
    ///
    /// # Panics
    ///
    /// Integer lanes panic on division by zero
    fn div(self, rhs: Self) -> Self;

    /// Lane-wise minimum (floats return the non-NaN operand)
    fn min(self, rhs: Self) -> Self;

    /// Lane-wise maximum (floats return the non-NaN operand)
    fn max(self, rhs: Self) -> Self;

    binary_forms! {
        rhs Self, scalar Self::Scalar => splat;
        add {
            scalar: add_scalar,
            masked: add_masked,
            scalar_masked: add_scalar_masked,
            assign: add_assign,
            scalar_assign: add_scalar_assign,
            masked_assign: add_masked_assign,
            scalar_masked_assign: add_scalar_masked_assign,
        }
        sub {
            scalar: sub_scalar,
            masked: sub_masked,
            scalar_masked: sub_scalar_masked,
            assign: sub_assign,
            scalar_assign: sub_scalar_assign,
            masked_assign: sub_masked_assign,
            scalar_masked_assign: sub_scalar_masked_assign,
        }
        mul {
            scalar: mul_scalar,
            masked: mul_masked,
            scalar_masked: mul_scalar_masked,
            assign: mul_assign,
            scalar_assign: mul_scalar_assign,
            masked_assign: mul_masked_assign,
            scalar_masked_assign: mul_scalar_masked_assign,
        }
        div {
            scalar: div_scalar,
            masked: div_masked,
            scalar_masked: div_scalar_masked,
            assign: div_assign,
            scalar_assign: div_scalar_assign,
            masked_assign: div_masked_assign,
            scalar_masked_assign: div_scalar_masked_assign,
        }
        min {
            scalar: min_scalar,
            masked: min_masked,
            scalar_masked: min_scalar_masked,
            assign: min_assign,
            scalar_assign: min_scalar_assign,
            masked_assign: min_masked_assign,
            scalar_masked_assign: min_scalar_masked_assign,
        }
        max {
            scalar: max_scalar,
            masked: max_masked,
            scalar_masked: max_scalar_masked,
            assign: max_assign,
            scalar_assign: max_scalar_assign,
            masked_assign: max_masked_assign,
            scalar_masked_assign: max_scalar_masked_assign,
        }
    }

    // Fused and compound arithmetic

    /// `self * b + c`
    ///
    /// Backends may fuse this into one instruction; the generic engine rounds
    /// after each step.
    #[inline(always)]
    fn mul_add(self, b: Self, c: Self) -> Self {
        self.mul(b).add(c)
    }

    /// `self * b - c`
    #[inline(always)]
    fn mul_sub(self, b: Self, c: Self) -> Self {
        self.mul(b).sub(c)
    }

    /// `(self + b) * c`
    #[inline(always)]
    fn add_mul(self, b: Self, c: Self) -> Self {
        self.add(b).mul(c)
    }

    /// `(self - b) * c`
    #[inline(always)]
    fn sub_mul(self, b: Self, c: Self) -> Self {
        self.sub(b).mul(c)
    }

    /// `mul_add` on the selected lanes; other lanes keep `self`
    #[inline(always)]
    fn mul_add_masked(self, mask: Self::Mask, b: Self, c: Self) -> Self {
        Self::select(mask, self.mul_add(b, c), self)
    }

    /// `mul_sub` on the selected lanes; other lanes keep `self`
    #[inline(always)]
    fn mul_sub_masked(self, mask: Self::Mask, b: Self, c: Self) -> Self {
        Self::select(mask, self.mul_sub(b, c), self)
    }

    /// `add_mul` on the selected lanes; other lanes keep `self`
    #[inline(always)]
    fn add_mul_masked(self, mask: Self::Mask, b: Self, c: Self) -> Self {
        Self::select(mask, self.add_mul(b, c), self)
    }

    /// `sub_mul` on the selected lanes; other lanes keep `self`
    #[inline(always)]
    fn sub_mul_masked(self, mask: Self::Mask, b: Self, c: Self) -> Self {
        Self::select(mask, self.sub_mul(b, c), self)
    }

    // Comparison

    /// Lane-wise `==`
    fn eq(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `<`
    fn lt(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `<=`
    fn le(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `!=` (true for NaN lanes)
    #[inline(always)]
    fn ne(self, rhs: Self) -> Self::Mask {
        self.eq(rhs).not()
    }

    /// Lane-wise `>`
    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        rhs.lt(self)
    }

    /// Lane-wise `>=`
    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        rhs.le(self)
    }

    /// `eq` against a broadcast scalar
    #[inline(always)]
    fn eq_scalar(self, rhs: Self::Scalar) -> Self::Mask {
        self.eq(Self::splat(rhs))
    }

    /// `ne` against a broadcast scalar
    #[inline(always)]
    fn ne_scalar(self, rhs: Self::Scalar) -> Self::Mask {
        self.ne(Self::splat(rhs))
    }

    /// `lt` against a broadcast scalar
    #[inline(always)]
    fn lt_scalar(self, rhs: Self::Scalar) -> Self::Mask {
        self.lt(Self::splat(rhs))
    }

    /// `le` against a broadcast scalar
    #[inline(always)]
    fn le_scalar(self, rhs: Self::Scalar) -> Self::Mask {
        self.le(Self::splat(rhs))
    }

    /// `gt` against a broadcast scalar
    #[inline(always)]
    fn gt_scalar(self, rhs: Self::Scalar) -> Self::Mask {
        self.gt(Self::splat(rhs))
    }

    /// `ge` against a broadcast scalar
    #[inline(always)]
    fn ge_scalar(self, rhs: Self::Scalar) -> Self::Mask {
        self.ge(Self::splat(rhs))
    }

    /// True if every lane compares equal
    #[inline(always)]
    fn eq_all(self, rhs: Self) -> bool {
        self.eq(rhs).all()
    }

    /// True if every lane equals `rhs`
    #[inline(always)]
    fn eq_all_scalar(self, rhs: Self::Scalar) -> bool {
        self.eq_scalar(rhs).all()
    }

    /// True if any lane differs
    #[inline(always)]
    fn ne_any(self, rhs: Self) -> bool {
        !self.eq_all(rhs)
    }

    // Horizontal reductions

    /// Sum of all lanes, folded from lane 0
    fn horizontal_sum(self) -> Self::Scalar;

    /// Product of all lanes, folded from lane 0
    fn horizontal_product(self) -> Self::Scalar;

    /// Minimum lane
    fn horizontal_min(self) -> Self::Scalar;

    /// Maximum lane
    fn horizontal_max(self) -> Self::Scalar;

    /// Sum with `seed` folded in before lane 0
    fn horizontal_sum_seeded(self, seed: Self::Scalar) -> Self::Scalar;

    /// Product with `seed` folded in before lane 0
    fn horizontal_product_seeded(self, seed: Self::Scalar) -> Self::Scalar;

    /// Minimum of `seed` and every lane
    fn horizontal_min_seeded(self, seed: Self::Scalar) -> Self::Scalar;

    /// Maximum of `seed` and every lane
    fn horizontal_max_seeded(self, seed: Self::Scalar) -> Self::Scalar;

    reduction_forms! {
        horizontal_sum {
            seeded: horizontal_sum_seeded,
            masked: horizontal_sum_masked,
            masked_seeded: horizontal_sum_masked_seeded,
            identity: <Self::Scalar as SimdElement>::ADD_IDENTITY,
        }
        horizontal_product {
            seeded: horizontal_product_seeded,
            masked: horizontal_product_masked,
            masked_seeded: horizontal_product_masked_seeded,
            identity: <Self::Scalar as SimdElement>::MUL_IDENTITY,
        }
        horizontal_min {
            seeded: horizontal_min_seeded,
            masked: horizontal_min_masked,
            masked_seeded: horizontal_min_masked_seeded,
            identity: <Self::Scalar as SimdElement>::MIN_IDENTITY,
        }
        horizontal_max {
            seeded: horizontal_max_seeded,
            masked: horizontal_max_masked,
            masked_seeded: horizontal_max_masked_seeded,
            identity: <Self::Scalar as SimdElement>::MAX_IDENTITY,
        }
    }

    // Lane movement

    /// Take `other`'s lanes where `mask` is set, keep `self` elsewhere
    #[inline(always)]
    fn blend(self, mask: Self::Mask, other: Self) -> Self {
        Self::select(mask, other, self)
    }

    /// Output lane `i` reads lane `swizzle.source(i)`
    #[inline(always)]
    fn swizzle(self, swizzle: &Self::Swizzle) -> Self {
        let source = self.to_array();
        let mut array = source;
        for (lane, value) in array.as_mut().iter_mut().enumerate() {
            *value = source.as_ref()[swizzle.source(lane)];
        }
        Self::from_array(array)
    }

    /// `swizzle` on the selected lanes; other lanes keep `self`
    #[inline(always)]
    fn swizzle_masked(self, mask: Self::Mask, swizzle: &Self::Swizzle) -> Self {
        Self::select(mask, self.swizzle(swizzle), self)
    }

    /// Lanes in reverse order
    #[inline(always)]
    fn reverse(self) -> Self {
        let mut array = self.to_array();
        array.as_mut().reverse();
        Self::from_array(array)
    }

    /// True if no two lanes compare equal
    ///
    /// NaN lanes never compare equal, so they always count as unique.
    #[inline]
    fn is_unique(self) -> bool {
        let array = self.to_array();
        let lanes = array.as_ref();
        for (i, a) in lanes.iter().enumerate() {
            if lanes[i + 1..].iter().any(|b| a == b) {
                return false;
            }
        }
        true
    }
}
