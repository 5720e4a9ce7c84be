/// Per-lane boolean selector
///
/// Masks come out of comparisons and drive every masked operation.
///
/// # Example
///
/// ```rust
/// use lanes::{f32x4, SimdMask, SimdVector};
///
/// let a = f32x4::splat(1.0);
/// let b = f32x4::from_array([0.0, 2.0, 0.0, 2.0]);
/// let mask = a.lt(b);
/// assert!(mask.any());
/// assert!(!mask.all());
/// assert_eq!(mask.count(), 2);
/// ```
pub trait SimdMask: Copy + Clone + Sized + 'static {
    /// Number of lanes
    const LANES: usize;

    /// Set every lane to `value`
    fn splat(value: bool) -> Self;

    /// Read one lane
    ///
    /// # Panics
    ///
    /// Panics if `lane` is not below `LANES`
    fn test(&self, lane: usize) -> bool;

    /// Write one lane
    ///
    /// # Panics
    ///
    /// Panics if `lane` is not below `LANES`
    fn set(&mut self, lane: usize, value: bool);

    /// Returns true if all lanes are set (horizontal AND)
    fn all(self) -> bool;

    /// Returns true if any lane is set (horizontal OR)
    ///
    /// This is the exit test of lane-parallel loops: iterate while any lane
    /// is still active.
    fn any(self) -> bool;

    /// Returns true if no lanes are set
    #[inline(always)]
    fn none(self) -> bool {
        !self.any()
    }

    /// Number of set lanes
    fn count(self) -> usize;

    /// `any` over the lanes selected by `mask` (false for an empty selection)
    #[inline(always)]
    fn any_masked(self, mask: Self) -> bool {
        self.and(mask).any()
    }

    /// `all` over the lanes selected by `mask` (true for an empty selection)
    #[inline(always)]
    fn all_masked(self, mask: Self) -> bool {
        self.or(mask.not()).all()
    }

    /// Lane-wise AND
    fn and(self, rhs: Self) -> Self;

    /// Lane-wise OR
    fn or(self, rhs: Self) -> Self;

    /// Lane-wise XOR
    fn xor(self, rhs: Self) -> Self;

    /// Lane-wise NOT
    fn not(self) -> Self;

    /// Lanes set in `self` and clear in `rhs`
    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        self.and(rhs.not())
    }
}
