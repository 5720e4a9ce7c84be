//! Lane permutations
//!
//! A `Swizzle<N>` holds one source-lane index per output lane. Indices are
//! validated on construction, so applying a swizzle never goes out of range.

use crate::error::LaneError;
use crate::lanes::{LaneCount, SupportedLaneCount};

/// Read access to per-lane source indices
///
/// Implemented by [`Swizzle`]; the vector contract uses it to apply a
/// permutation without knowing the concrete swizzle type.
pub trait LaneIndices: Copy {
    /// Number of lanes
    const LANES: usize;

    /// Source lane for output `lane`, always below `LANES`
    fn source(&self, lane: usize) -> usize;
}

/// Source-lane indices for a vector of `N` lanes
///
/// # Example
///
/// ```rust
/// use lanes::{u32x4, SimdVector, Swizzle};
///
/// let v = u32x4::from_array([10, 20, 30, 40]);
/// let s = Swizzle::new([3, 3, 0, 1]);
/// assert_eq!(v.swizzle(&s).to_array(), [40, 40, 10, 20]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swizzle<const N: usize>
where
    LaneCount<N>: SupportedLaneCount,
{
    indices: [u32; N],
}

impl<const N: usize> Swizzle<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Build a swizzle from source indices
    ///
    /// # Panics
    ///
    /// Panics if any index is not below `N`
    pub fn new(indices: [u32; N]) -> Self {
        match Self::try_new(indices) {
            Ok(swizzle) => swizzle,
            Err(err) => panic!("{}", err),
        }
    }

    /// Build a swizzle, reporting the first index that is not below `N`
    pub fn try_new(indices: [u32; N]) -> Result<Self, LaneError> {
        for &index in &indices {
            if index as usize >= N {
                return Err(LaneError::LaneOutOfRange {
                    lane: index as usize,
                    lanes: N,
                });
            }
        }
        Ok(Self { indices })
    }

    /// Each lane reads itself
    pub fn identity() -> Self {
        Self {
            indices: core::array::from_fn(|i| i as u32),
        }
    }

    /// Lane order reversed
    pub fn reversed() -> Self {
        Self {
            indices: core::array::from_fn(|i| (N - 1 - i) as u32),
        }
    }

    /// Every lane reads `lane`
    ///
    /// # Panics
    ///
    /// Panics if `lane` is not below `N`
    pub fn broadcast(lane: usize) -> Self {
        assert!(lane < N, "lane {} out of range for {} lanes", lane, N);
        Self {
            indices: [lane as u32; N],
        }
    }

    /// Output lane `i` reads lane `(i + by) % N`
    pub fn rotate_left(by: usize) -> Self {
        Self {
            indices: core::array::from_fn(|i| ((i + by) % N) as u32),
        }
    }

    /// Source indices
    pub const fn indices(&self) -> &[u32; N] {
        &self.indices
    }

    /// True when every source lane is used exactly once
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; N];
        for &index in &self.indices {
            let slot = &mut seen[index as usize];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }
}

impl<const N: usize> LaneIndices for Swizzle<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    const LANES: usize = N;

    #[inline(always)]
    fn source(&self, lane: usize) -> usize {
        self.indices[lane] as usize
    }
}

impl<const N: usize> Default for Swizzle<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> TryFrom<[u32; N]> for Swizzle<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Error = LaneError;

    fn try_from(indices: [u32; N]) -> Result<Self, LaneError> {
        Self::try_new(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_index() {
        assert_eq!(
            Swizzle::<4>::try_new([0, 1, 4, 2]),
            Err(LaneError::LaneOutOfRange { lane: 4, lanes: 4 })
        );
        assert!(Swizzle::<4>::try_new([3, 2, 1, 0]).is_ok());
    }

    #[test]
    #[should_panic(expected = "L004")]
    fn test_new_panics_on_bad_index() {
        let _ = Swizzle::<2>::new([0, 2]);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Swizzle::<4>::identity().indices(), &[0, 1, 2, 3]);
        assert_eq!(Swizzle::<4>::reversed().indices(), &[3, 2, 1, 0]);
        assert_eq!(Swizzle::<4>::broadcast(2).indices(), &[2, 2, 2, 2]);
        assert_eq!(Swizzle::<4>::rotate_left(1).indices(), &[1, 2, 3, 0]);
        assert_eq!(Swizzle::<1>::reversed().indices(), &[0]);
    }

    #[test]
    fn test_is_permutation() {
        assert!(Swizzle::<8>::reversed().is_permutation());
        assert!(Swizzle::<8>::rotate_left(3).is_permutation());
        assert!(!Swizzle::<8>::broadcast(0).is_permutation());
    }
}
