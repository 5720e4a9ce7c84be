#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate libm;

// Scalar lane types
pub mod element;

// Lane counts and per-lane loops
pub mod lanes;

// Checked adapter errors
pub mod error;

// Masks and swizzles
pub mod mask;
pub mod swizzle;

// (element, lane count) table
pub mod resolver;

// Backend contract
pub mod traits;

// Backend implementations
pub mod backends;

// Functional-style vector operations
pub mod ops;

// Aligned buffers
pub mod block;

pub use backends::generic::Vector;
pub use block::{Block, ChunkMut, Chunks, ChunksMut};
pub use element::{
    ElementKind, FloatElement, FloatToInt, IntElement, IntToFloat, Narrow, SignedElement,
    SimdElement, UnsignedElement, Widen,
};
pub use error::LaneError;
pub use lanes::{LaneCount, SupportedLaneCount};
pub use mask::Mask;
pub use resolver::*;
pub use swizzle::{LaneIndices, Swizzle};
pub use traits::{
    Demote, FloatToIntVector, GatherScatter, IntToFloatVector, Packable, Promote,
    ReinterpretSign, SimdFloat, SimdInteger, SimdMask, SimdSigned, SimdVector,
};

/// Contract traits in one import
///
/// ```rust
/// use lanes::prelude::*;
///
/// let v = f32x4::from_array([1.0, -2.0, 3.0, -4.0]);
/// assert_eq!(v.abs().horizontal_sum(), 10.0);
/// ```
pub mod prelude {
    pub use crate::resolver::*;
    pub use crate::{
        Block, Demote, FloatToIntVector, GatherScatter, IntToFloatVector, Mask, Packable, Promote,
        ReinterpretSign, SimdFloat, SimdInteger, SimdMask, SimdSigned, SimdVector, Swizzle, Vector,
    };
}
