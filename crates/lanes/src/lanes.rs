//! Lane counts and the per-lane loop helpers
//!
//! `LaneCount<N>` lifts a lane count into the type system so the resolver can
//! implement traits for it. Only powers of two from 1 to 128 are supported.
//!
//! The helpers below are the whole of the generic engine's execution strategy:
//! every operation is one of these loops over a `[T; N]` array. None of them
//! carries a dependency between lanes.

mod sealed {
    pub trait Sealed {}
}

use sealed::Sealed;

/// Type-level lane count
pub struct LaneCount<const N: usize>;

/// Lane counts a mask, swizzle or vector can have
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported lane count",
    note = "lane counts are 1, 2, 4, 8, 16, 32, 64 and 128"
)]
pub trait SupportedLaneCount: Sealed {
    /// The lane count as a value
    const LANES: usize;
}

macro_rules! supported_lane_counts {
    ($($n:literal),*) => {$(
        impl Sealed for LaneCount<$n> {}

        impl SupportedLaneCount for LaneCount<$n> {
            const LANES: usize = $n;
        }
    )*};
}

supported_lane_counts!(1, 2, 4, 8, 16, 32, 64, 128);

/// Per-lane choice: `mask[i] ? new[i] : old[i]`
///
/// This is the single pass-through helper every masked operation goes
/// through. Unselected lanes keep `old` bit for bit.
#[inline(always)]
pub(crate) fn select<T: Copy, const N: usize>(mask: &[bool; N], new: &[T; N], old: &[T; N]) -> [T; N] {
    core::array::from_fn(|i| if mask[i] { new[i] } else { old[i] })
}

/// Apply `f` to every lane
#[inline(always)]
pub(crate) fn map<T: Copy, U, const N: usize>(lanes: &[T; N], f: impl Fn(T) -> U) -> [U; N] {
    core::array::from_fn(|i| f(lanes[i]))
}

/// Apply `f` lane by lane to two arrays
#[inline(always)]
pub(crate) fn zip_map<T: Copy, U: Copy, R, const N: usize>(
    a: &[T; N],
    b: &[U; N],
    f: impl Fn(T, U) -> R,
) -> [R; N] {
    core::array::from_fn(|i| f(a[i], b[i]))
}

/// Fold all lanes starting from lane 0
#[inline(always)]
pub(crate) fn fold<T: Copy, const N: usize>(lanes: &[T; N], f: impl Fn(T, T) -> T) -> T {
    let mut acc = lanes[0];
    for &lane in &lanes[1..] {
        acc = f(acc, lane);
    }
    acc
}

/// Fold all lanes after an initial value
#[inline(always)]
pub(crate) fn fold_seeded<T: Copy, const N: usize>(lanes: &[T; N], seed: T, f: impl Fn(T, T) -> T) -> T {
    lanes.iter().fold(seed, |acc, &lane| f(acc, lane))
}
